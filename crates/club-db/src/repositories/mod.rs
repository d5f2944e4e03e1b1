//! PostgreSQL repository implementations

mod club;
mod error;
mod membership;
mod user;

pub use club::PgClubRepository;
pub use membership::PgMembershipRepository;
pub use user::PgUserRepository;
