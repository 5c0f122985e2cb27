//! Member service
//!
//! Handles member CRUD, dynamic search, pagination, and bulk mutations.
//! Every mutation ends with an explicit cache invalidation so previously
//! materialized search results are never served stale.

use roster_core::entities::Member;
use roster_core::search::MemberSearchCondition;
use roster_core::value_objects::{MemberId, PageRequest, TeamId};
use tracing::{info, instrument};

use crate::dto::{
    BulkAgeRequest, BulkRenameRequest, BulkResponse, CreateMemberRequest, MemberDto,
    MemberResponse, MemberTeamDto, PageResponse, UserDto,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a member, optionally joining an existing team
    #[instrument(skip(self, request))]
    pub async fn create_member(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let team_id = match request.team_id {
            Some(raw) => {
                let team_id = TeamId::new(raw);
                self.ctx
                    .team_repo()
                    .find_by_id(team_id)
                    .await?
                    .ok_or_else(|| ServiceError::not_found("Team", team_id.to_string()))?;
                Some(team_id)
            }
            None => None,
        };

        let mut member = Member::new(request.username, request.age);
        member.team_id = team_id;

        let id = self.ctx.member_repo().create(&member).await?;
        member.id = id;

        self.ctx.member_cache().invalidate_all();
        info!(member_id = %id, "Member created");

        Ok(MemberResponse::from(member))
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, id: MemberId) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", id.to_string()))?;

        Ok(MemberResponse::from(member))
    }

    /// List all members
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().find_all().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Delete a member
    #[instrument(skip(self))]
    pub async fn delete_member(&self, id: MemberId) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;
        self.ctx.member_cache().invalidate_all();
        info!(member_id = %id, "Member deleted");
        Ok(())
    }

    /// Dynamic search (parameter-list predicate strategy), read-through cached
    #[instrument(skip(self))]
    pub async fn search(&self, condition: &MemberSearchCondition) -> ServiceResult<Vec<MemberTeamDto>> {
        let key = condition.predicates();
        if let Some(cached) = self.ctx.member_cache().get(&key) {
            return Ok(cached);
        }

        let records = self.ctx.member_repo().search(condition).await?;
        let dtos: Vec<MemberTeamDto> = records.into_iter().map(Into::into).collect();
        self.ctx.member_cache().put(key, dtos.clone());
        Ok(dtos)
    }

    /// Dynamic search via the builder-accumulation strategy. Shares the
    /// cache with `search`: both strategies compose the same predicate set
    /// for the same condition, so the key is identical.
    #[instrument(skip(self))]
    pub async fn search_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> ServiceResult<Vec<MemberTeamDto>> {
        let key = condition.predicates_by_builder();
        if let Some(cached) = self.ctx.member_cache().get(&key) {
            return Ok(cached);
        }

        let records = self.ctx.member_repo().search_by_builder(condition).await?;
        let dtos: Vec<MemberTeamDto> = records.into_iter().map(Into::into).collect();
        self.ctx.member_cache().put(key, dtos.clone());
        Ok(dtos)
    }

    /// Dynamic search projected to the narrow member shape
    #[instrument(skip(self))]
    pub async fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> ServiceResult<Vec<MemberDto>> {
        let records = self.ctx.member_repo().search_members(condition).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Dynamic search projected with the username aliased to `name`
    #[instrument(skip(self))]
    pub async fn search_users(
        &self,
        condition: &MemberSearchCondition,
    ) -> ServiceResult<Vec<UserDto>> {
        let records = self.ctx.member_repo().search_members(condition).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Paged dynamic search. Page size is validated here: zero is a client
    /// error, never coerced.
    #[instrument(skip(self))]
    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: u32,
        size: u32,
    ) -> ServiceResult<PageResponse<MemberTeamDto>> {
        let request = PageRequest::new(page, size)?;
        let page = self.ctx.member_repo().search_page(condition, request).await?;
        Ok(PageResponse::from(page.map(MemberTeamDto::from)))
    }

    /// Bulk-rename members younger than the cutoff. Rows change underneath
    /// any loaded entities, so the cache is invalidated before returning.
    #[instrument(skip(self, request))]
    pub async fn rename_below_age(&self, request: BulkRenameRequest) -> ServiceResult<BulkResponse> {
        let affected = self
            .ctx
            .member_repo()
            .rename_below_age(&request.new_username, request.age_lt)
            .await?;

        self.ctx.member_cache().invalidate_all();
        info!(affected, "Bulk rename applied");
        Ok(BulkResponse { affected })
    }

    /// Bulk age increment across all members
    #[instrument(skip(self, request))]
    pub async fn increment_age(&self, request: BulkAgeRequest) -> ServiceResult<BulkResponse> {
        let affected = self.ctx.member_repo().increment_age(request.delta).await?;

        self.ctx.member_cache().invalidate_all();
        info!(affected, "Bulk age increment applied");
        Ok(BulkResponse { affected })
    }

    /// Bulk-delete members older than the cutoff
    #[instrument(skip(self))]
    pub async fn delete_older_than(&self, age_gt: i32) -> ServiceResult<BulkResponse> {
        let affected = self.ctx.member_repo().delete_older_than(age_gt).await?;

        self.ctx.member_cache().invalidate_all();
        info!(affected, "Bulk delete applied");
        Ok(BulkResponse { affected })
    }

    /// Drop all cached search results. Exposed for callers that mutate the
    /// store outside this service.
    pub fn invalidate_cache(&self) {
        self.ctx.member_cache().invalidate_all();
    }
}
