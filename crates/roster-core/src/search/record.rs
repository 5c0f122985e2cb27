//! Read models produced by the search queries
//!
//! These are projections built directly by the query layer, never persisted.
//! Team columns come from a left outer join, so members without a team keep
//! `None` there.

use crate::value_objects::{MemberId, TeamId};

/// Member row joined with its (optional) team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTeamRecord {
    pub member_id: MemberId,
    pub username: String,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}

/// Narrow member projection (no join columns in the output)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub username: String,
    pub age: i32,
}
