//! Entity ↔ model mappers

mod member;
mod team;

pub use member::MemberInsert;
pub use team::team_with_members;
