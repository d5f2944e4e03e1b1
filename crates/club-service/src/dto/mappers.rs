//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use club_core::entities::{Club, Membership, User};

use super::responses::{ClubResponse, MembershipResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            experience_level: user.experience.as_i16(),
            experience_label: user.experience.label(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Club Mappers
// ============================================================================

impl From<&Club> for ClubResponse {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id.to_string(),
            name: club.name.clone(),
            location: club.location.clone(),
            description: club.description.clone(),
            created_at: club.created_at,
        }
    }
}

impl From<Club> for ClubResponse {
    fn from(club: Club) -> Self {
        Self::from(&club)
    }
}

// ============================================================================
// Membership Mappers
// ============================================================================

impl From<&Membership> for MembershipResponse {
    fn from(membership: &Membership) -> Self {
        Self {
            club_id: membership.club_id.to_string(),
            user_id: membership.user_id.to_string(),
            role: membership.role,
            joined_at: membership.joined_at,
        }
    }
}

impl From<Membership> for MembershipResponse {
    fn from(membership: Membership) -> Self {
        Self::from(&membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::{ExperienceLevel, RoleTag, Snowflake};

    #[test]
    fn test_user_response_mapping() {
        let user = User::new(
            Snowflake::new(7),
            "a@b.org".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            ExperienceLevel::Expert,
        );
        let response = UserResponse::from(&user);
        assert_eq!(response.id, "7");
        assert_eq!(response.experience_level, 5);
        assert_eq!(response.experience_label, "Expert");
    }

    #[test]
    fn test_membership_response_mapping() {
        let row = Membership::new(Snowflake::new(1), Snowflake::new(2), RoleTag::Officer);
        let response = MembershipResponse::from(&row);
        assert_eq!(response.club_id, "1");
        assert_eq!(response.user_id, "2");
        assert_eq!(response.role, RoleTag::Officer);
    }
}
