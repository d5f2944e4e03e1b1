//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the memberships table.
/// The role is stored as its three-letter code and decoded by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub club_id: i64,
    pub user_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
