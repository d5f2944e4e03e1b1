//! Membership entity <-> model mapper

use club_core::entities::Membership;
use club_core::error::DomainError;
use club_core::value_objects::{RoleTag, Snowflake};

use crate::models::MembershipModel;

/// Convert MembershipModel to Membership entity.
/// Fails on an unknown role code, which indicates a corrupt row.
impl TryFrom<MembershipModel> for Membership {
    type Error = DomainError;

    fn try_from(model: MembershipModel) -> Result<Self, Self::Error> {
        Ok(Membership {
            club_id: Snowflake::new(model.club_id),
            user_id: Snowflake::new(model.user_id),
            role: RoleTag::from_code(&model.role)?,
            joined_at: model.joined_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_model(role: &str) -> MembershipModel {
        MembershipModel {
            club_id: 1,
            user_id: 2,
            role: role.to_string(),
            joined_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_entity() {
        let row = Membership::try_from(sample_model("OWN")).unwrap();
        assert_eq!(row.role, RoleTag::Owner);
        assert_eq!(row.club_id, Snowflake::new(1));
    }

    #[test]
    fn test_unknown_role_code_rejected() {
        let err = Membership::try_from(sample_model("ZZZ")).unwrap_err();
        assert!(matches!(err, DomainError::UnknownRoleCode(_)));
    }
}
