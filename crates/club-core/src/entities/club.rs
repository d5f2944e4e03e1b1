//! Club entity - a club in the registry
//!
//! Note: the club record carries no owner column. Ownership is a role in
//! the membership ledger, so transferring it never touches this table.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Club entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: Snowflake,
    /// Unique display name; first word must be at least four word characters
    pub name: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Maximum length for the club name
    pub const MAX_NAME_LEN: usize = 50;
    /// Maximum length for the location
    pub const MAX_LOCATION_LEN: usize = 100;
    /// Maximum length for the description
    pub const MAX_DESCRIPTION_LEN: usize = 520;
    /// Minimum word characters the name must start with
    pub const MIN_NAME_PREFIX: usize = 4;

    /// Create a new Club
    pub fn new(id: Snowflake, name: String, location: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            location,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the club-name shape rule: the name must open with at least
    /// four consecutive word characters (alphanumeric or underscore).
    pub fn name_is_valid(name: &str) -> bool {
        if name.is_empty() || name.len() > Self::MAX_NAME_LEN {
            return false;
        }
        let prefix_len = name
            .chars()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .count();
        prefix_len >= Self::MIN_NAME_PREFIX
    }

    /// Update the club name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the location
    pub fn set_location(&mut self, location: String) {
        self.location = location;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_creation() {
        let club = Club::new(
            Snowflake::new(1),
            "Kerbal Chess Club".to_string(),
            "London".to_string(),
            "Friendly weekly games.".to_string(),
        );
        assert_eq!(club.name, "Kerbal Chess Club");
        assert_eq!(club.location, "London");
    }

    #[test]
    fn test_name_validation() {
        assert!(Club::name_is_valid("Chess Club"));
        assert!(Club::name_is_valid("Club_42"));
        assert!(Club::name_is_valid("ABCD"));

        // Fewer than four leading word characters
        assert!(!Club::name_is_valid("Ab Club"));
        assert!(!Club::name_is_valid("A-Team"));
        assert!(!Club::name_is_valid(""));
        assert!(!Club::name_is_valid("   Chess"));
    }

    #[test]
    fn test_name_length_cap() {
        let long = "a".repeat(Club::MAX_NAME_LEN + 1);
        assert!(!Club::name_is_valid(&long));
        let max = "a".repeat(Club::MAX_NAME_LEN);
        assert!(Club::name_is_valid(&max));
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut club = Club::new(
            Snowflake::new(1),
            "Chess Club".to_string(),
            "London".to_string(),
            "desc".to_string(),
        );
        let before = club.updated_at;
        club.set_location("Manchester".to_string());
        assert!(club.updated_at >= before);
        assert_eq!(club.location, "Manchester");
    }
}
