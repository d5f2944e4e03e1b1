//! Entity ↔ model mappers

mod club;
mod membership;
mod user;
