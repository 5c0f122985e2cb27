//! Member entity <-> model mappers

use roster_core::entities::Member;
use roster_core::search::{MemberRecord, MemberTeamRecord};
use roster_core::value_objects::{MemberId, TeamId};

use crate::models::{MemberModel, MemberNarrowModel, MemberTeamRowModel};

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.id),
            username: model.username,
            age: model.age,
            team_id: model.team_id.map(TeamId::new),
        }
    }
}

impl From<MemberTeamRowModel> for MemberTeamRecord {
    fn from(model: MemberTeamRowModel) -> Self {
        MemberTeamRecord {
            member_id: MemberId::new(model.member_id),
            username: model.username,
            age: model.age,
            team_id: model.team_id.map(TeamId::new),
            team_name: model.team_name,
        }
    }
}

impl From<MemberNarrowModel> for MemberRecord {
    fn from(model: MemberNarrowModel) -> Self {
        MemberRecord {
            username: model.username,
            age: model.age,
        }
    }
}

/// Convert Member entity reference to values for database insertion
pub struct MemberInsert {
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl MemberInsert {
    pub fn new(member: &Member) -> Self {
        Self {
            username: member.username.clone(),
            age: member.age,
            team_id: member.team_id.map(TeamId::into_inner),
        }
    }
}
