//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ClubAction, RoleTag, Snowflake};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Club not found: {0}")]
    ClubNotFound(Snowflake),

    #[error("No membership in this club")]
    MembershipNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Club name must start with at least four alphanumeric characters")]
    InvalidClubName,

    #[error("Experience level out of range: {0}")]
    InvalidExperienceLevel(i16),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Role does not permit action: {0}")]
    ActionNotPermitted(ClubAction),

    #[error("Not the club owner")]
    NotClubOwner,

    #[error("User is banned from this club")]
    UserBanned,

    // =========================================================================
    // Conflict / Invariant Violations
    // =========================================================================
    #[error("Username already in use")]
    UsernameTaken,

    #[error("Club name already in use")]
    ClubNameTaken,

    #[error("An application is already pending for this club")]
    AlreadyApplied,

    #[error("Already holds a role in this club")]
    AlreadyInClub,

    #[error("Target role is {found}, operation requires {expected}")]
    RoleMismatch { expected: RoleTag, found: RoleTag },

    #[error("Club already has an owner")]
    DuplicateOwner,

    #[error("Cannot remove the club owner (transfer ownership first)")]
    CannotRemoveOwner,

    #[error("Ownership transfer preconditions no longer hold")]
    OwnershipTransferConflict,

    #[error("Unknown role code in storage: {0}")]
    UnknownRoleCode(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ClubNotFound(_) => "UNKNOWN_CLUB",
            Self::MembershipNotFound => "UNKNOWN_MEMBERSHIP",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::InvalidClubName => "INVALID_CLUB_NAME",
            Self::InvalidExperienceLevel(_) => "INVALID_EXPERIENCE_LEVEL",

            // Authorization
            Self::ActionNotPermitted(_) => "MISSING_ROLE",
            Self::NotClubOwner => "NOT_CLUB_OWNER",
            Self::UserBanned => "USER_BANNED",

            // Conflict / invariants
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::ClubNameTaken => "CLUB_NAME_TAKEN",
            Self::AlreadyApplied => "ALREADY_APPLIED",
            Self::AlreadyInClub => "ALREADY_IN_CLUB",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::DuplicateOwner => "DUPLICATE_OWNER",
            Self::CannotRemoveOwner => "CANNOT_REMOVE_OWNER",
            Self::OwnershipTransferConflict => "OWNERSHIP_TRANSFER_CONFLICT",
            Self::UnknownRoleCode(_) => "UNKNOWN_ROLE_CODE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ClubNotFound(_) | Self::MembershipNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::InvalidClubName
                | Self::InvalidExperienceLevel(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::ActionNotPermitted(_) | Self::NotClubOwner | Self::UserBanned
        )
    }

    /// Check if this is a conflict / invariant violation
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::ClubNameTaken
                | Self::AlreadyApplied
                | Self::AlreadyInClub
                | Self::RoleMismatch { .. }
                | Self::DuplicateOwner
                | Self::CannotRemoveOwner
                | Self::OwnershipTransferConflict
                | Self::UnknownRoleCode(_)
        )
    }
}
