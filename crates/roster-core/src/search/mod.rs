//! Dynamic member search
//!
//! Translates a sparse search condition into a conjunction of predicate
//! fragments, independent of any SQL library. The database layer renders the
//! composed `PredicateSet` into a WHERE clause; `PredicateSet::matches`
//! evaluates the same semantics in memory.

mod condition;
mod predicate;
mod record;

pub use condition::MemberSearchCondition;
pub use predicate::{Predicate, PredicateBuilder, PredicateSet};
pub use record::{MemberRecord, MemberTeamRecord};
