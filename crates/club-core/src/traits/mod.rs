//! Repository traits (ports)

mod repositories;

pub use repositories::{ClubRepository, MembershipRepository, RepoResult, UserRepository};
