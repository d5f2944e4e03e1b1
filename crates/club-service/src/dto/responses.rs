//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use club_core::RoleTag;
use serde::Serialize;

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bio: String,
    pub experience_level: i16,
    pub experience_label: &'static str,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Club Responses
// ============================================================================

/// Basic club response
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Club detail page: owner, size, and how the viewer stands with the club.
/// The viewer's standing is collapsed: any accepted participant shows as
/// "member", pending applicants as "applicant", banned users as "banned".
#[derive(Debug, Serialize)]
pub struct ClubOverviewResponse {
    #[serde(flatten)]
    pub club: ClubResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserResponse>,
    pub member_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_standing: Option<&'static str>,
}

/// Club feed for accepted participants
#[derive(Debug, Serialize)]
pub struct ClubFeedResponse {
    pub club: ClubResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserResponse>,
    pub officers: Vec<UserResponse>,
    pub members: Vec<UserResponse>,
    pub applicant_count: i64,
    pub viewer_role: RoleTag,
}

// ============================================================================
// Membership Responses
// ============================================================================

/// A single ledger row
#[derive(Debug, Clone, Serialize)]
pub struct MembershipResponse {
    pub club_id: String,
    pub user_id: String,
    pub role: RoleTag,
    pub joined_at: DateTime<Utc>,
}

/// A roster entry: ledger row joined with the user record
#[derive(Debug, Serialize)]
pub struct RosterEntryResponse {
    pub user: UserResponse,
    pub role: RoleTag,
    pub joined_at: DateTime<Utc>,
}

/// A club seen from one user's perspective (their clubs / applications)
#[derive(Debug, Serialize)]
pub struct ClubMembershipResponse {
    pub club: ClubResponse,
    pub role: RoleTag,
    pub joined_at: DateTime<Utc>,
}
