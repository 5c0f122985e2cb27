//! Entity/record -> DTO mappers

use roster_core::entities::{Member, Team};
use roster_core::search::{MemberRecord, MemberTeamRecord};
use roster_core::value_objects::{MemberId, TeamId};

use super::responses::{MemberDto, MemberResponse, MemberTeamDto, TeamResponse, UserDto};

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.into_inner(),
            username: member.username,
            age: member.age,
            team_id: member.team_id.map(TeamId::into_inner),
        }
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.into_inner(),
            name: team.name,
            member_ids: team.member_ids.into_iter().map(MemberId::into_inner).collect(),
        }
    }
}

impl From<MemberTeamRecord> for MemberTeamDto {
    fn from(record: MemberTeamRecord) -> Self {
        Self {
            member_id: record.member_id.into_inner(),
            username: record.username,
            age: record.age,
            team_id: record.team_id.map(TeamId::into_inner),
            team_name: record.team_name,
        }
    }
}

impl From<MemberRecord> for MemberDto {
    fn from(record: MemberRecord) -> Self {
        Self {
            username: record.username,
            age: record.age,
        }
    }
}

impl From<MemberRecord> for UserDto {
    fn from(record: MemberRecord) -> Self {
        Self {
            name: record.username,
            age: record.age,
        }
    }
}
