//! # roster-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    BulkAgeRequest, BulkRenameRequest, BulkResponse, CreateMemberRequest, CreateTeamRequest,
    MemberDto, MemberResponse, MemberTeamDto, PageResponse, TeamResponse, UserDto,
};
pub use services::{
    MemberCache, MemberService, ServiceContext, ServiceError, ServiceResult, TeamService,
};
