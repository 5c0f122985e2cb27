//! Member entity - a person that optionally belongs to one team

use crate::entities::Team;
use crate::value_objects::{MemberId, TeamId};

/// Member entity. `team_id` is the owning side of the Member/Team
/// relationship; `Team::member_ids` is only a derived index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl Member {
    /// Create a new unpersisted Member without a team
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            id: MemberId::UNSET,
            username: username.into(),
            age,
            team_id: None,
        }
    }

    /// Create a new unpersisted Member already assigned to a team
    pub fn with_team(username: impl Into<String>, age: i32, team: &mut Team) -> Self {
        let mut member = Self::new(username, age);
        member.change_team(team);
        member
    }

    /// Assign this member to a team.
    ///
    /// The single mutator for the relationship: sets the owning reference and
    /// keeps the team's derived member index consistent (the member appears
    /// in it exactly once, no matter how often this is called).
    pub fn change_team(&mut self, team: &mut Team) {
        self.team_id = Some(team.id);
        team.index_member(self.id);
    }

    /// Whether the member currently belongs to a team
    #[inline]
    pub fn has_team(&self) -> bool {
        self.team_id.is_some()
    }
}
