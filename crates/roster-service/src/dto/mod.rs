//! Data transfer objects for the service layer

mod mappers;
mod requests;
mod responses;

pub use requests::{BulkAgeRequest, BulkRenameRequest, CreateMemberRequest, CreateTeamRequest};
pub use responses::{
    BulkResponse, MemberDto, MemberResponse, MemberTeamDto, PageResponse, TeamResponse, UserDto,
};
