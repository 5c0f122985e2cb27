//! Team handlers
//!
//! Endpoints for team CRUD and team membership.

use axum::{
    extract::{Path, State},
    Json,
};
use roster_core::value_objects::TeamId;
use roster_service::{CreateTeamRequest, MemberResponse, TeamResponse, TeamService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a team
///
/// POST /api/v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<Json<TeamResponse>>> {
    let service = TeamService::new(state.service_context());
    let response = service.create_team(request).await?;
    Ok(Created(Json(response)))
}

/// Get team by ID
///
/// GET /api/v1/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.get_team(TeamId::new(team_id)).await?;
    Ok(Json(response))
}

/// Delete a team
///
/// DELETE /api/v1/teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = TeamService::new(state.service_context());
    service.delete_team(TeamId::new(team_id)).await?;
    Ok(NoContent)
}

/// List members of a team
///
/// GET /api/v1/teams/{team_id}/members
pub async fn team_members(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = TeamService::new(state.service_context());
    let members = service.team_members(TeamId::new(team_id)).await?;
    Ok(Json(members))
}
