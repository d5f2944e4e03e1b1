//! User entity - a registered account in the identity store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Self-reported playing strength, on the original 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Experienced,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Numeric storage value (1-5)
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Beginner => 1,
            Self::Experienced => 2,
            Self::Intermediate => 3,
            Self::Advanced => 4,
            Self::Expert => 5,
        }
    }

    /// Decode the numeric storage value
    pub fn from_i16(value: i16) -> Result<Self, DomainError> {
        match value {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Experienced),
            3 => Ok(Self::Intermediate),
            4 => Ok(Self::Advanced),
            5 => Ok(Self::Expert),
            other => Err(DomainError::InvalidExperienceLevel(other)),
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Experienced => "Experienced",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    /// Email-shaped handle, globally unique and case-sensitive
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Free-text biography; empty string means unset
    pub bio: String,
    pub experience: ExperienceLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Maximum length for first and last name
    pub const MAX_NAME_LEN: usize = 50;
    /// Maximum length for the biography
    pub const MAX_BIO_LEN: usize = 520;

    /// Create a new User with required fields
    pub fn new(
        id: Snowflake,
        username: String,
        first_name: String,
        last_name: String,
        experience: ExperienceLevel,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            first_name,
            last_name,
            bio: String::new(),
            experience,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name: "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Update the display name pair
    pub fn set_name(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.updated_at = Utc::now();
    }

    /// Update the biography
    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }

    /// Update the experience level
    pub fn set_experience(&mut self, experience: ExperienceLevel) {
        self.experience = experience;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Snowflake::new(1),
            "johndoe@example.org".to_string(),
            "John".to_string(),
            "Doe".to_string(),
            ExperienceLevel::Beginner,
        )
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_user().full_name(), "John Doe");
    }

    #[test]
    fn test_new_user_has_empty_bio() {
        assert!(sample_user().bio.is_empty());
    }

    #[test]
    fn test_experience_level_roundtrip() {
        for value in 1..=5_i16 {
            let level = ExperienceLevel::from_i16(value).unwrap();
            assert_eq!(level.as_i16(), value);
        }
        assert!(ExperienceLevel::from_i16(0).is_err());
        assert!(ExperienceLevel::from_i16(6).is_err());
    }

    #[test]
    fn test_experience_labels() {
        assert_eq!(ExperienceLevel::Beginner.label(), "Beginner");
        assert_eq!(ExperienceLevel::Expert.label(), "Expert");
    }

    #[test]
    fn test_setters_touch_updated_at() {
        let mut user = sample_user();
        let before = user.updated_at;
        user.set_bio("Plays the London System.".to_string());
        assert!(user.updated_at >= before);
        assert_eq!(user.bio, "Plays the London System.");
    }
}
