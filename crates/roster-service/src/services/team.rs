//! Team service

use roster_core::entities::Team;
use roster_core::value_objects::TeamId;
use tracing::{info, instrument};

use crate::dto::{CreateTeamRequest, MemberResponse, TeamResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team. Team names are unique; a duplicate is a conflict.
    #[instrument(skip(self, request))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> ServiceResult<TeamResponse> {
        if self.ctx.team_repo().find_by_name(&request.name).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "Team '{}' already exists",
                request.name
            )));
        }

        let mut team = Team::new(request.name);
        let id = self.ctx.team_repo().create(&team).await?;
        team.id = id;

        info!(team_id = %id, "Team created");
        Ok(TeamResponse::from(team))
    }

    /// Get team by ID
    #[instrument(skip(self))]
    pub async fn get_team(&self, id: TeamId) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", id.to_string()))?;

        Ok(TeamResponse::from(team))
    }

    /// Delete a team. Members keep existing; the store clears their team
    /// reference, so cached joins are stale and get dropped.
    #[instrument(skip(self))]
    pub async fn delete_team(&self, id: TeamId) -> ServiceResult<()> {
        self.ctx.team_repo().delete(id).await?;
        self.ctx.member_cache().invalidate_all();
        info!(team_id = %id, "Team deleted");
        Ok(())
    }

    /// Members of a team, queried from the store
    #[instrument(skip(self))]
    pub async fn team_members(&self, id: TeamId) -> ServiceResult<Vec<MemberResponse>> {
        self.ctx
            .team_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", id.to_string()))?;

        let members = self.ctx.team_repo().find_members(id).await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }
}
