//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::{Member, Team};
use roster_core::traits::{RepoResult, TeamRepository};
use roster_core::value_objects::TeamId;

use crate::mappers::team_with_members;
use crate::models::{MemberModel, TeamModel};

use super::error::{map_db_error, team_not_found};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Rebuild the derived member index for a team by query
    async fn load_member_ids(&self, team_id: i64) -> RepoResult<Vec<i64>> {
        let member_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM members WHERE team_id = $1 ORDER BY id
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(member_ids)
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT id, name FROM teams WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let member_ids = self.load_member_ids(model.id).await?;
                Ok(Some(team_with_members(model, member_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT id, name FROM teams WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => {
                let member_ids = self.load_member_ids(model.id).await?;
                Ok(Some(team_with_members(model, member_ids)))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, team))]
    async fn create(&self, team: &Team) -> RepoResult<TeamId> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO teams (name) VALUES ($1) RETURNING id
            "#,
        )
        .bind(&team.name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(TeamId::new(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TeamId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM teams WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(team_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_members(&self, id: TeamId) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, username, age, team_id FROM members WHERE team_id = $1 ORDER BY id
            "#,
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}
