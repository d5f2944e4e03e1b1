//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub experience_level: i16,
}

impl RegisterUserRequest {
    pub fn unique() -> Self {
        Self {
            username: format!("user{}@example.org", Uuid::new_v4().simple()),
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
            bio: None,
            experience_level: 1,
        }
    }
}

/// Create club request
#[derive(Debug, Serialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub location: String,
    pub description: String,
}

impl CreateClubRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Club{}", Uuid::new_v4().simple()),
            location: "London".to_string(),
            description: "An integration test club.".to_string(),
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub experience_level: i16,
    pub experience_label: String,
}

/// Club response
#[derive(Debug, Deserialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
}

/// Club overview response (club fields are flattened at the top level)
#[derive(Debug, Deserialize)]
pub struct ClubOverviewResponse {
    pub id: String,
    pub name: String,
    pub owner: Option<UserResponse>,
    pub member_count: i64,
    pub viewer_standing: Option<String>,
}

/// Membership response
#[derive(Debug, Deserialize)]
pub struct MembershipResponse {
    pub club_id: String,
    pub user_id: String,
    pub role: String,
}

/// Roster entry response
#[derive(Debug, Deserialize)]
pub struct RosterEntryResponse {
    pub user: UserResponse,
    pub role: String,
}
