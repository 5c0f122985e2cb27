//! Route definitions
//!
//! API routes organized by domain, mounted under /api/v1 and /api/v2.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{health, members, teams};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .nest("/api/v2", api_v2_routes())
}

/// Health check routes (mounted outside the API prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(member_routes()).merge(team_routes())
}

/// API v2 routes (paged search)
fn api_v2_routes() -> Router<AppState> {
    Router::new().route("/members", get(members::search_members_v2))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        // Dynamic search (non-paged) and creation
        .route("/members", get(members::search_members_v1))
        .route("/members", post(members::create_member))
        // Bulk mutations; registered before :member_id so "bulk" does not
        // shadow-match as a path parameter
        .route("/members/bulk", delete(members::bulk_delete))
        .route("/members/bulk/rename", post(members::bulk_rename))
        .route("/members/bulk/age", post(members::bulk_age))
        // Member CRUD
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id", delete(members::delete_member))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id", delete(teams::delete_team))
        .route("/teams/:team_id/members", get(teams::team_members))
}
