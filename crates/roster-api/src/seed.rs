//! Development data loader
//!
//! Seeds two teams and one hundred members on startup when enabled via
//! configuration. Even-numbered members join teamA, odd-numbered join
//! teamB, and each member's age equals its index.

use roster_common::AppError;
use roster_service::{CreateMemberRequest, CreateTeamRequest, MemberService, TeamService};
use tracing::info;

use crate::state::AppState;

/// Load the sample data set. Skipped when teamA already exists, so a
/// restart does not duplicate members.
pub async fn load_sample_data(state: &AppState) -> Result<(), AppError> {
    let ctx = state.service_context();

    if ctx.team_repo().find_by_name("teamA").await?.is_some() {
        info!("Sample data already present, skipping seed");
        return Ok(());
    }

    let team_service = TeamService::new(ctx);
    let member_service = MemberService::new(ctx);

    let team_a = team_service
        .create_team(CreateTeamRequest {
            name: "teamA".to_string(),
        })
        .await
        .map_err(AppError::from)?;
    let team_b = team_service
        .create_team(CreateTeamRequest {
            name: "teamB".to_string(),
        })
        .await
        .map_err(AppError::from)?;

    for i in 0..100 {
        let team_id = if i % 2 == 0 { team_a.id } else { team_b.id };
        member_service
            .create_member(CreateMemberRequest {
                username: format!("member{i}"),
                age: i,
                team_id: Some(team_id),
            })
            .await
            .map_err(AppError::from)?;
    }

    info!("Sample data loaded: 2 teams, 100 members");
    Ok(())
}
