//! PostgreSQL repository implementations

mod error;
mod member;
mod team;

pub use member::PgMemberRepository;
pub use team::PgTeamRepository;
