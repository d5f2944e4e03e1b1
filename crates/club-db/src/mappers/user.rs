//! User entity <-> model mapper

use club_core::entities::{ExperienceLevel, User};
use club_core::error::DomainError;
use club_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity.
/// Fails on an out-of-range experience level, which indicates a corrupt row.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            experience: ExperienceLevel::from_i16(model.experience_level)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
