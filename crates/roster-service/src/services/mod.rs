//! Application services

mod cache;
mod context;
mod error;
mod member;
mod team;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::MemberCache;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use team::TeamService;
