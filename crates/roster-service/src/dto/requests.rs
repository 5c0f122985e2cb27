//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(range(min = 0, max = 200, message = "Age must be 0-200"))]
    pub age: i32,

    /// Team to join on creation, if any
    pub team_id: Option<i64>,
}

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    pub name: String,
}

/// Bulk-rename members younger than `age_lt`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkRenameRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub new_username: String,

    pub age_lt: i32,
}

/// Bulk age increment across all members
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BulkAgeRequest {
    #[validate(range(min = -200, max = 200, message = "Delta must be -200..=200"))]
    pub delta: i32,
}
