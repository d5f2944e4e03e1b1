//! # club-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `club-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional ownership swap
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::pool::{create_pool, DatabaseConfig};
//! use club_db::repositories::PgMembershipRepository;
//! use club_core::traits::MembershipRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let memberships = PgMembershipRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{PgClubRepository, PgMembershipRepository, PgUserRepository};

/// Embedded migrations for this crate's schema
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
