//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use tracing::instrument;

use roster_core::entities::Member;
use roster_core::search::{MemberRecord, MemberSearchCondition, MemberTeamRecord, PredicateSet};
use roster_core::traits::{MemberRepository, RepoResult};
use roster_core::value_objects::{MemberId, Page, PageRequest};

use crate::mappers::MemberInsert;
use crate::models::{MemberModel, MemberNarrowModel, MemberTeamRowModel};
use crate::query::{
    push_predicates, MEMBER_NARROW_SELECT, MEMBER_TEAM_COUNT, MEMBER_TEAM_SELECT,
};

use super::error::{map_db_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the wide join query under an already-composed predicate set.
    /// Both construction strategies funnel through here, so identical sets
    /// produce identical result sets.
    async fn search_with(&self, set: &PredicateSet) -> RepoResult<Vec<MemberTeamRecord>> {
        let mut qb = QueryBuilder::new(MEMBER_TEAM_SELECT);
        push_predicates(&mut qb, set);

        let rows: Vec<MemberTeamRowModel> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, username, age, team_id FROM members WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, username, age, team_id FROM members ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, username, age, team_id FROM members WHERE username = $1 ORDER BY id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &Member) -> RepoResult<MemberId> {
        let insert = MemberInsert::new(member);
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO members (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&insert.username)
        .bind(insert.age)
        .bind(insert.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(MemberId::new(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MemberId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM members WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberTeamRecord>> {
        self.search_with(&condition.predicates()).await
    }

    #[instrument(skip(self))]
    async fn search_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberTeamRecord>> {
        self.search_with(&condition.predicates_by_builder()).await
    }

    #[instrument(skip(self))]
    async fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberRecord>> {
        let mut qb = QueryBuilder::new(MEMBER_NARROW_SELECT);
        push_predicates(&mut qb, &condition.predicates());

        let rows: Vec<MemberNarrowModel> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamRecord>> {
        let set = condition.predicates();

        // Count query under the same predicate set as the content query
        let mut count_qb = QueryBuilder::new(MEMBER_TEAM_COUNT);
        push_predicates(&mut count_qb, &set);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        // Content query with an explicit deterministic order; an offset past
        // the end naturally yields empty content with the real total
        let mut qb = QueryBuilder::new(MEMBER_TEAM_SELECT);
        push_predicates(&mut qb, &set);
        qb.push(" ORDER BY m.id LIMIT ");
        qb.push_bind(page.limit());
        qb.push(" OFFSET ");
        qb.push_bind(page.offset());

        let rows: Vec<MemberTeamRowModel> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(rows.into_iter().map(Into::into).collect(), total, page))
    }

    #[instrument(skip(self))]
    async fn rename_below_age(&self, new_username: &str, age_lt: i32) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE members SET username = $1 WHERE age < $2
            "#,
        )
        .bind(new_username)
        .bind(age_lt)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn increment_age(&self, delta: i32) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE members SET age = age + $1
            "#,
        )
        .bind(delta)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, age_gt: i32) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM members WHERE age > $1
            "#,
        )
        .bind(age_gt)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
