//! Member database models

use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// Projection of the member/team left outer join. Team columns are null for
/// members without a team.
#[derive(Debug, Clone, FromRow)]
pub struct MemberTeamRowModel {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Narrow member projection (username and age only)
#[derive(Debug, Clone, FromRow)]
pub struct MemberNarrowModel {
    pub username: String,
    pub age: i32,
}
