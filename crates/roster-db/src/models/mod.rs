//! Database models - `FromRow` structs mirroring tables and projections

mod member;
mod team;

pub use member::{MemberModel, MemberNarrowModel, MemberTeamRowModel};
pub use team::TeamModel;
