//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;

pub use ids::{IdParseError, MemberId, TeamId};
pub use page::{Page, PageRequest};
