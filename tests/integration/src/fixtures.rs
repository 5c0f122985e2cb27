//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Teams and usernames
//! are uniqued per process so tests can share one database.

use serde::{Deserialize, Serialize};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data (unique across processes too)
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}_{}", process::id(), n)
}

/// Create team request
#[derive(Debug, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl CreateTeamRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("team{}", unique_suffix()),
        }
    }
}

/// Create member request
#[derive(Debug, Serialize)]
pub struct CreateMemberRequest {
    pub username: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

impl CreateMemberRequest {
    pub fn unique(age: i32, team_id: Option<i64>) -> Self {
        Self {
            username: format!("member{}", unique_suffix()),
            age,
            team_id,
        }
    }
}

/// Bulk rename request
#[derive(Debug, Serialize)]
pub struct BulkRenameRequest {
    pub new_username: String,
    pub age_lt: i32,
}

/// Bulk age request
#[derive(Debug, Serialize)]
pub struct BulkAgeRequest {
    pub delta: i32,
}

/// Team response
#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub member_ids: Vec<i64>,
}

/// Member response
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub username: String,
    pub age: i32,
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// Member/team search row
#[derive(Debug, Deserialize)]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub team_name: Option<String>,
}

/// Page envelope
#[derive(Debug, Deserialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_count: i64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: i64,
}

/// Bulk mutation response
#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    pub affected: u64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
