//! # roster-core
//!
//! Domain layer containing entities, search predicates, paging value objects,
//! and repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod search;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Member, Team};
pub use error::DomainError;
pub use search::{
    MemberRecord, MemberSearchCondition, MemberTeamRecord, Predicate, PredicateBuilder,
    PredicateSet,
};
pub use traits::{MemberRepository, RepoResult, TeamRepository};
pub use value_objects::{MemberId, Page, PageRequest, TeamId};
