//! Membership entity - one role row in the ledger
//!
//! The ledger holds at most one row per (club, user) pair. Lifecycle
//! operations mutate the role tag in place or delete the row; they never
//! create a second row for the same pair.

use chrono::{DateTime, Utc};

use crate::value_objects::{RoleTag, Snowflake};

/// Membership row (junction between User and Club, carrying one role tag)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub club_id: Snowflake,
    pub user_id: Snowflake,
    pub role: RoleTag,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    /// Create a new membership row
    pub fn new(club_id: Snowflake, user_id: Snowflake, role: RoleTag) -> Self {
        let now = Utc::now();
        Self {
            club_id,
            user_id,
            role,
            joined_at: now,
            updated_at: now,
        }
    }

    /// Reassign the role tag
    pub fn set_role(&mut self, role: RoleTag) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Check whether this row grants management rights
    #[inline]
    pub fn is_management(&self) -> bool {
        self.role.is_management()
    }
}
