//! Service context - dependency container for services
//!
//! Holds the repositories and the read cache needed by services.

use std::sync::Arc;

use roster_core::traits::{MemberRepository, TeamRepository};

use super::cache::MemberCache;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    team_repo: Arc<dyn TeamRepository>,
    member_cache: MemberCache,
}

impl ServiceContext {
    /// Create a new ServiceContext
    pub fn new(member_repo: Arc<dyn MemberRepository>, team_repo: Arc<dyn TeamRepository>) -> Self {
        Self {
            member_repo,
            team_repo,
            member_cache: MemberCache::new(),
        }
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the search result cache
    pub fn member_cache(&self) -> &MemberCache {
        &self.member_cache
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("member_cache", &self.member_cache.len())
            .finish_non_exhaustive()
    }
}
