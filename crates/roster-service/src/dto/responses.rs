//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. They are
//! projections produced per query call and never persisted.

use roster_core::value_objects::Page;
use serde::Serialize;

// ============================================================================
// Member / Team Responses
// ============================================================================

/// Member entity response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub username: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

/// Team entity response with the derived member index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub member_ids: Vec<i64>,
}

// ============================================================================
// Search projections
// ============================================================================

/// Member joined with its (optional) team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberTeamDto {
    pub member_id: i64,
    pub username: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
}

/// Narrow member projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDto {
    pub username: String,
    pub age: i32,
}

/// Member projection with the username aliased to `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub name: String,
    pub age: i32,
}

// ============================================================================
// Envelopes
// ============================================================================

/// Page envelope: a bounded content slice plus total-count metadata
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_count: i64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: i64,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            content: page.content,
            total_count: page.total,
            page_number: page.page,
            page_size: page.size,
            total_pages,
        }
    }
}

/// Result of a bulk mutation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BulkResponse {
    /// Number of rows affected at the storage layer
    pub affected: u64,
}
