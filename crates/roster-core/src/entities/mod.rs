//! Domain entities - core business objects

mod member;
mod team;

pub use member::Member;
pub use team::Team;
