//! Permission service
//!
//! The single authorization gate for club operations. Every guarded call
//! goes through [`PermissionService::authorize`]: club existence is checked
//! first (a missing club fails closed before any role lookup), then the
//! actor's current role is read from the ledger and run through the pure
//! decision table. There is no caching; each check re-reads the row.

use club_core::value_objects::{is_allowed, ClubAction, RoleTag, Snowflake};
use club_core::DomainError;
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current role of a user in a club, after verifying the club exists.
    /// `None` means the user holds no row (outsider), distinct from Banned.
    #[instrument(skip(self))]
    pub async fn role_of(
        &self,
        club_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<Option<RoleTag>> {
        if self.ctx.club_repo().find_by_id(club_id).await?.is_none() {
            return Err(ServiceError::not_found("Club", club_id.to_string()));
        }

        let role = self
            .ctx
            .membership_repo()
            .find(club_id, user_id)
            .await?
            .map(|m| m.role);

        Ok(role)
    }

    /// Authorize `actor_id` to perform `action` in `club_id`.
    ///
    /// Returns the actor's current role on success so callers don't re-read
    /// the ledger. Denials distinguish a banned actor from a merely
    /// under-privileged one.
    #[instrument(skip(self))]
    pub async fn authorize(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
        action: ClubAction,
    ) -> ServiceResult<Option<RoleTag>> {
        let role = self.role_of(club_id, actor_id).await?;

        if is_allowed(role, action) {
            debug!(club_id = %club_id, actor_id = %actor_id, %action, ?role, "Action authorized");
            return Ok(role);
        }

        if role == Some(RoleTag::Banned) {
            return Err(DomainError::UserBanned.into());
        }

        Err(ServiceError::permission_denied(action.name()))
    }

    /// Check if a user is an accepted participant of a club
    #[instrument(skip(self))]
    pub async fn is_participant(
        &self,
        club_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<bool> {
        let role = self.role_of(club_id, user_id).await?;
        Ok(role.is_some_and(RoleTag::is_participant))
    }

    /// Check if a user is the club owner
    #[instrument(skip(self))]
    pub async fn is_owner(&self, club_id: Snowflake, user_id: Snowflake) -> ServiceResult<bool> {
        let role = self.role_of(club_id, user_id).await?;
        Ok(role == Some(RoleTag::Owner))
    }
}
