//! Team entity

use crate::value_objects::{MemberId, TeamId};

/// Team entity. `member_ids` is a derived, denormalized index of the inverse
/// relationship; it is never read by the persistence layer, which computes
/// membership by query over `Member.team_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub member_ids: Vec<MemberId>,
}

impl Team {
    /// Create a new unpersisted Team
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TeamId::UNSET,
            name: name.into(),
            member_ids: Vec::new(),
        }
    }

    /// Record a member in the derived index, once.
    ///
    /// Only called from `Member::change_team`; the member side owns the
    /// relationship.
    pub(crate) fn index_member(&mut self, member_id: MemberId) {
        if !self.member_ids.contains(&member_id) {
            self.member_ids.push(member_id);
        }
    }

    /// Number of members in the derived index
    #[inline]
    pub fn member_count(&self) -> usize {
        self.member_ids.len()
    }
}
