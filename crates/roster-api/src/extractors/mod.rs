//! Request extractors

mod pagination;
mod validated;

pub use pagination::Pagination;
pub use validated::ValidatedJson;
