//! Error handling utilities for repositories

use roster_core::error::DomainError;
use roster_core::value_objects::{MemberId, TeamId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "member not found" error
pub fn member_not_found(id: MemberId) -> DomainError {
    DomainError::MemberNotFound(id)
}

/// Create a "team not found" error
pub fn team_not_found(id: TeamId) -> DomainError {
    DomainError::TeamNotFound(id)
}
