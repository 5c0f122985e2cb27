//! In-process read cache for materialized search results
//!
//! Keyed by the composed predicate set, so blank and absent criteria share
//! one entry. Bulk mutations at the storage layer leave cached results
//! stale; invalidation is therefore an explicit, visible step: every
//! mutating service operation calls `invalidate_all`, and the operation is
//! exposed on the service API for callers that mutate the store out of band.

use std::sync::Arc;

use dashmap::DashMap;
use roster_core::search::PredicateSet;

use crate::dto::MemberTeamDto;

/// Shared cache of search result sets
#[derive(Debug, Clone, Default)]
pub struct MemberCache {
    entries: Arc<DashMap<PredicateSet, Vec<MemberTeamDto>>>,
}

impl MemberCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result set for a predicate set, if fresh
    pub fn get(&self, key: &PredicateSet) -> Option<Vec<MemberTeamDto>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Store a materialized result set
    pub fn put(&self, key: PredicateSet, value: Vec<MemberTeamDto>) {
        self.entries.insert(key, value);
    }

    /// Drop every cached result set. Must be called after any mutation that
    /// can change search results.
    pub fn invalidate_all(&self) {
        self.entries.clear();
    }

    /// Number of cached result sets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
