//! Team entity <-> model mapper

use roster_core::entities::Team;
use roster_core::value_objects::{MemberId, TeamId};

use crate::models::TeamModel;

/// Convert TeamModel to Team entity
/// Note: the derived member index is loaded separately, see `team_with_members`
impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: TeamId::new(model.id),
            name: model.name,
            member_ids: Vec::new(), // Loaded separately
        }
    }
}

/// Convert TeamModel with queried member ids to Team entity
pub fn team_with_members(model: TeamModel, member_ids: Vec<i64>) -> Team {
    Team {
        id: TeamId::new(model.id),
        name: model.name,
        member_ids: member_ids.into_iter().map(MemberId::new).collect(),
    }
}
