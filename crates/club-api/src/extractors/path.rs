//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use club_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with club_id
#[derive(Debug, serde::Deserialize)]
pub struct ClubIdPath {
    pub club_id: String,
}

impl ClubIdPath {
    /// Parse club_id as Snowflake
    pub fn club_id(&self) -> Result<Snowflake, ApiError> {
        self.club_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid club_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with club_id and user_id
#[derive(Debug, serde::Deserialize)]
pub struct ClubUserPath {
    pub club_id: String,
    pub user_id: String,
}

impl ClubUserPath {
    /// Parse club_id as Snowflake
    pub fn club_id(&self) -> Result<Snowflake, ApiError> {
        self.club_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid club_id format"))
    }

    /// Parse user_id as Snowflake
    pub fn user_id(&self) -> Result<Snowflake, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}
