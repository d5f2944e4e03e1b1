//! Club role tags
//!
//! A membership row carries exactly one of these tags. The set is closed:
//! the ladder runs Applicant -> Member -> Officer -> Owner, with Banned as a
//! side state reachable only from Member. The three-letter codes are the
//! persisted wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role held by a user within a single club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTag {
    /// Requested to join, not yet decided
    Applicant,
    /// Accepted, base access
    Member,
    /// Elevated management rights
    Officer,
    /// Full control; exactly one per populated club
    Owner,
    /// Explicitly excluded; distinct from having no membership row
    Banned,
}

impl RoleTag {
    /// Three-letter storage code
    pub const fn code(self) -> &'static str {
        match self {
            Self::Applicant => "APP",
            Self::Member => "MEM",
            Self::Officer => "OFF",
            Self::Owner => "OWN",
            Self::Banned => "BAN",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicant => "Applicant",
            Self::Member => "Member",
            Self::Officer => "Officer",
            Self::Owner => "Owner",
            Self::Banned => "Banned",
        }
    }

    /// Decode a storage code
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code {
            "APP" => Ok(Self::Applicant),
            "MEM" => Ok(Self::Member),
            "OFF" => Ok(Self::Officer),
            "OWN" => Ok(Self::Owner),
            "BAN" => Ok(Self::Banned),
            other => Err(DomainError::UnknownRoleCode(other.to_string())),
        }
    }

    /// Officers and the owner manage applicants, members, and bans
    #[inline]
    pub const fn is_management(self) -> bool {
        matches!(self, Self::Officer | Self::Owner)
    }

    /// Accepted participants: everyone past the application gate
    #[inline]
    pub const fn is_participant(self) -> bool {
        matches!(self, Self::Member | Self::Officer | Self::Owner)
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for role in [
            RoleTag::Applicant,
            RoleTag::Member,
            RoleTag::Officer,
            RoleTag::Owner,
            RoleTag::Banned,
        ] {
            assert_eq!(RoleTag::from_code(role.code()).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = RoleTag::from_code("XYZ").unwrap_err();
        assert!(matches!(err, DomainError::UnknownRoleCode(_)));
    }

    #[test]
    fn test_management_and_participation() {
        assert!(RoleTag::Officer.is_management());
        assert!(RoleTag::Owner.is_management());
        assert!(!RoleTag::Member.is_management());
        assert!(!RoleTag::Applicant.is_management());
        assert!(!RoleTag::Banned.is_management());

        assert!(RoleTag::Member.is_participant());
        assert!(RoleTag::Owner.is_participant());
        assert!(!RoleTag::Applicant.is_participant());
        assert!(!RoleTag::Banned.is_participant());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(RoleTag::Owner.to_string(), "Owner");
        assert_eq!(RoleTag::Applicant.to_string(), "Applicant");
    }
}
