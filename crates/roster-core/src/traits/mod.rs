mod repositories;

pub use repositories::{MemberRepository, RepoResult, TeamRepository};
