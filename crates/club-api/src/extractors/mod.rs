//! Axum extractors for request handling
//!
//! Custom extractors for actor identity, path parsing, pagination, and
//! validated JSON bodies.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{ActorId, ACTOR_ID_HEADER};
pub use pagination::{Pagination, PaginationParams};
pub use path::{ClubIdPath, ClubUserPath, UserIdPath};
pub use validated::ValidatedJson;
