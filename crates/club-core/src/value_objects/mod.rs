//! Value objects - identifiers and role policy

mod permissions;
mod role;
mod snowflake;

pub use permissions::{is_allowed, ClubAction};
pub use role::RoleTag;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
