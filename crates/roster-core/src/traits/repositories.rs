//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Lookups return `Ok(None)` when the row is
//! absent; store failures surface as `DomainError::DatabaseError` and are
//! never retried here.

use async_trait::async_trait;

use crate::entities::{Member, Team};
use crate::error::DomainError;
use crate::search::{MemberRecord, MemberSearchCondition, MemberTeamRecord};
use crate::value_objects::{MemberId, Page, PageRequest, TeamId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID (absence is `Ok(None)`, not an error)
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// List all members in insertion order
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// List members with an exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Member>>;

    /// Persist a new member, returning the store-generated id
    async fn create(&self, member: &Member) -> RepoResult<MemberId>;

    /// Delete a member by id
    async fn delete(&self, id: MemberId) -> RepoResult<()>;

    /// Dynamic search over the member/team left outer join, parameter-list
    /// predicate strategy. An all-absent condition returns every row.
    async fn search(&self, condition: &MemberSearchCondition)
        -> RepoResult<Vec<MemberTeamRecord>>;

    /// Same search via the builder-accumulation strategy. Result sets are
    /// identical to `search` for identical inputs by contract.
    async fn search_by_builder(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberTeamRecord>>;

    /// Dynamic search projected to the narrow member shape (no join columns
    /// in the output; the join still constrains `team_name`)
    async fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepoResult<Vec<MemberRecord>>;

    /// Paged search: count query and content query run under the same
    /// predicate set, content ordered by member id.
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamRecord>>;

    /// Bulk-rename members younger than `age_lt`; returns rows affected.
    /// Callers must treat previously loaded members as stale afterwards.
    async fn rename_below_age(&self, new_username: &str, age_lt: i32) -> RepoResult<u64>;

    /// Bulk age increment across all members; returns rows affected
    async fn increment_age(&self, delta: i32) -> RepoResult<u64>;

    /// Bulk-delete members older than `age_gt`; returns rows affected
    async fn delete_older_than(&self, age_gt: i32) -> RepoResult<u64>;
}

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find team by ID
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>>;

    /// Find team by exact name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;

    /// Persist a new team, returning the store-generated id
    async fn create(&self, team: &Team) -> RepoResult<TeamId>;

    /// Delete a team by id
    async fn delete(&self, id: TeamId) -> RepoResult<()>;

    /// Members of a team, computed by query (the entity's member index is
    /// derived and never read here)
    async fn find_members(&self, id: TeamId) -> RepoResult<Vec<Member>>;
}
