//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Shape rules that depend on domain knowledge (club name
//! prefix, experience decoding) are enforced in the services on top of
//! these field-level checks.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    /// Email-shaped handle, used to log in
    #[validate(email(message = "Username must be a valid email address"))]
    pub username: String,

    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(max = 520, message = "Bio must be at most 520 characters"))]
    pub bio: Option<String>,

    /// Experience on the 1-5 scale
    #[validate(range(min = 1, max = 5, message = "Experience level must be 1-5"))]
    pub experience_level: i16,
}

/// Profile edit request; all fields optional
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 520, message = "Bio must be at most 520 characters"))]
    pub bio: Option<String>,

    #[validate(range(min = 1, max = 5, message = "Experience level must be 1-5"))]
    pub experience_level: Option<i16>,
}

// ============================================================================
// Club Requests
// ============================================================================

/// Create club request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 4, max = 50, message = "Club name must be 4-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 520, message = "Description must be 1-520 characters"))]
    pub description: String,
}

/// Update club request
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateClubRequest {
    #[validate(length(min = 4, max = 50, message = "Club name must be 4-50 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 520, message = "Description must be 1-520 characters"))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterUserRequest {
            username: "johndoe@example.org".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            bio: None,
            experience_level: 1,
        };
        assert!(valid.validate().is_ok());

        let bad_username = RegisterUserRequest {
            username: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_username.validate().is_err());

        let bad_level = RegisterUserRequest {
            experience_level: 6,
            ..valid.clone()
        };
        assert!(bad_level.validate().is_err());

        let long_bio = RegisterUserRequest {
            bio: Some("x".repeat(521)),
            ..valid
        };
        assert!(long_bio.validate().is_err());
    }

    #[test]
    fn test_create_club_request_validation() {
        let valid = CreateClubRequest {
            name: "Chess Club".to_string(),
            location: "London".to_string(),
            description: "Weekly games.".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_name = CreateClubRequest {
            name: "Ab".to_string(),
            ..valid.clone()
        };
        assert!(short_name.validate().is_err());

        let empty_location = CreateClubRequest {
            location: String::new(),
            ..valid
        };
        assert!(empty_location.validate().is_err());
    }
}
