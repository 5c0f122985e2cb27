//! # roster-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `roster-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Rendering composed predicate sets into WHERE clauses
//!
//! The table layout lives in `schema.sql` at the crate root.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::PoolSettings;
//! use roster_db::repositories::PgMemberRepository;
//! use roster_core::traits::MemberRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = PoolSettings::from_env().connect().await?;
//!     let member_repo = PgMemberRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;

// Re-export commonly used types
pub use pool::{PgPool, PoolSettings};
pub use query::push_predicates;
pub use repositories::{PgMemberRepository, PgTeamRepository};
