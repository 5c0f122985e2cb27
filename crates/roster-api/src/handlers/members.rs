//! Member handlers
//!
//! Endpoints for member CRUD, dynamic search, and bulk mutations.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use roster_core::search::MemberSearchCondition;
use roster_core::value_objects::MemberId;
use roster_service::{
    BulkAgeRequest, BulkRenameRequest, BulkResponse, CreateMemberRequest, MemberResponse,
    MemberService, MemberTeamDto, PageResponse,
};
use serde::Deserialize;

use crate::extractors::{Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Search members (non-paged)
///
/// GET /api/v1/members?username=&teamName=&ageGoe=&ageLoe=
///
/// All condition fields are optional; the absent ones simply do not
/// constrain the result. No condition at all returns every member.
pub async fn search_members_v1(
    State(state): State<AppState>,
    Query(condition): Query<MemberSearchCondition>,
) -> ApiResult<Json<Vec<MemberTeamDto>>> {
    let service = MemberService::new(state.service_context());
    let result = service.search_by_builder(&condition).await?;
    Ok(Json(result))
}

/// Search members (paged)
///
/// GET /api/v2/members?username=&teamName=&ageGoe=&ageLoe=&page=&size=
pub async fn search_members_v2(
    State(state): State<AppState>,
    Query(condition): Query<MemberSearchCondition>,
    pagination: Pagination,
) -> ApiResult<Json<PageResponse<MemberTeamDto>>> {
    let service = MemberService::new(state.service_context());
    let page = service
        .search_page(&condition, pagination.page, pagination.size)
        .await?;
    Ok(Json(page))
}

/// Create a member
///
/// POST /api/v1/members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.create_member(request).await?;
    Ok(Created(Json(response)))
}

/// Get member by ID
///
/// GET /api/v1/members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.get_member(MemberId::new(member_id)).await?;
    Ok(Json(response))
}

/// Delete a member
///
/// DELETE /api/v1/members/{member_id}
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = MemberService::new(state.service_context());
    service.delete_member(MemberId::new(member_id)).await?;
    Ok(NoContent)
}

/// Bulk-rename members below an age cutoff
///
/// POST /api/v1/members/bulk/rename
pub async fn bulk_rename(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BulkRenameRequest>,
) -> ApiResult<Json<BulkResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.rename_below_age(request).await?;
    Ok(Json(response))
}

/// Bulk age increment
///
/// POST /api/v1/members/bulk/age
pub async fn bulk_age(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BulkAgeRequest>,
) -> ApiResult<Json<BulkResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.increment_age(request).await?;
    Ok(Json(response))
}

/// Bulk delete query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteParams {
    pub age_gt: i32,
}

/// Bulk-delete members above an age cutoff
///
/// DELETE /api/v1/members/bulk?ageGt=
pub async fn bulk_delete(
    State(state): State<AppState>,
    Query(params): Query<BulkDeleteParams>,
) -> ApiResult<Json<BulkResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.delete_older_than(params.age_gt).await?;
    Ok(Json(response))
}
