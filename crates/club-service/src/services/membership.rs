//! Membership service
//!
//! The lifecycle state machine over the ledger: apply, withdraw, accept,
//! reject, ban, unban, promote, demote, transfer ownership, remove. Every
//! operation takes an explicit actor id, authorizes exactly once through
//! the permission service, checks the target's current role, and performs
//! a single ledger write. Failures leave the ledger untouched.

use club_core::entities::Membership;
use club_core::value_objects::{ClubAction, RoleTag, Snowflake};
use club_core::DomainError;
use tracing::{info, instrument};

use crate::dto::MembershipResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// Membership service
pub struct MembershipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MembershipService<'a> {
    /// Create a new MembershipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply to a club. The actor must hold no row in the club: banned
    /// users are refused outright, and an existing role (including a
    /// pending application) is a conflict.
    #[instrument(skip(self))]
    pub async fn apply(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<MembershipResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let role = permission_service.role_of(club_id, actor_id).await?;

        match role {
            None => {}
            Some(RoleTag::Banned) => return Err(DomainError::UserBanned.into()),
            Some(RoleTag::Applicant) => return Err(DomainError::AlreadyApplied.into()),
            Some(_) => return Err(DomainError::AlreadyInClub.into()),
        }

        // The club exists (role_of checked); the user must too.
        if self.ctx.user_repo().find_by_id(actor_id).await?.is_none() {
            return Err(ServiceError::not_found("User", actor_id.to_string()));
        }

        let membership = Membership::new(club_id, actor_id, RoleTag::Applicant);
        self.ctx.membership_repo().upsert(&membership).await?;

        info!(club_id = %club_id, user_id = %actor_id, "Application submitted");

        Ok(MembershipResponse::from(&membership))
    }

    /// Withdraw a pending application. Only the applicant themselves can
    /// do this, and only while still an applicant.
    #[instrument(skip(self))]
    pub async fn withdraw(&self, club_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        let role = permission_service.role_of(club_id, actor_id).await?;

        match role {
            None => return Err(DomainError::MembershipNotFound.into()),
            Some(RoleTag::Applicant) => {}
            Some(_) => {
                return Err(
                    DomainError::ActionNotPermitted(ClubAction::WithdrawApplication).into(),
                )
            }
        }

        self.ctx.membership_repo().delete(club_id, actor_id).await?;

        info!(club_id = %club_id, user_id = %actor_id, "Application withdrawn");

        Ok(())
    }

    /// Accept an applicant into the club (actor: Officer/Owner)
    #[instrument(skip(self))]
    pub async fn accept_applicant(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<MembershipResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::AcceptApplicant)
            .await?;

        let mut membership = self
            .require_target_role(club_id, target_id, RoleTag::Applicant)
            .await?;

        membership.set_role(RoleTag::Member);
        self.ctx.membership_repo().upsert(&membership).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Applicant accepted");

        Ok(MembershipResponse::from(&membership))
    }

    /// Reject an applicant: their row is removed (actor: Officer/Owner)
    #[instrument(skip(self))]
    pub async fn reject_applicant(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::RejectApplicant)
            .await?;

        self.require_target_role(club_id, target_id, RoleTag::Applicant)
            .await?;

        self.ctx.membership_repo().delete(club_id, target_id).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Applicant rejected");

        Ok(())
    }

    /// Ban a member (actor: Officer/Owner). The target must currently be
    /// exactly `Member`: officers and the owner cannot be banned.
    #[instrument(skip(self))]
    pub async fn ban_member(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<MembershipResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::BanMember)
            .await?;

        let mut membership = self
            .require_target_role(club_id, target_id, RoleTag::Member)
            .await?;

        membership.set_role(RoleTag::Banned);
        self.ctx.membership_repo().upsert(&membership).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Member banned");

        Ok(MembershipResponse::from(&membership))
    }

    /// Lift a ban (actor: Officer/Owner). The row is removed entirely:
    /// the user returns to outsider standing and must re-apply from
    /// scratch, with no memory of their prior membership.
    #[instrument(skip(self))]
    pub async fn unban_member(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::UnbanMember)
            .await?;

        self.require_target_role(club_id, target_id, RoleTag::Banned)
            .await?;

        self.ctx.membership_repo().delete(club_id, target_id).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Member unbanned");

        Ok(())
    }

    /// Promote a member to officer (actor: Officer/Owner). Applicants and
    /// banned users cannot be promoted.
    #[instrument(skip(self))]
    pub async fn promote_member(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<MembershipResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::PromoteMember)
            .await?;

        let mut membership = self
            .require_target_role(club_id, target_id, RoleTag::Member)
            .await?;

        membership.set_role(RoleTag::Officer);
        self.ctx.membership_repo().upsert(&membership).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Member promoted to officer");

        Ok(MembershipResponse::from(&membership))
    }

    /// Demote an officer back to member (actor: Owner)
    #[instrument(skip(self))]
    pub async fn demote_officer(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<MembershipResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::DemoteOfficer)
            .await?;

        let mut membership = self
            .require_target_role(club_id, target_id, RoleTag::Officer)
            .await?;

        membership.set_role(RoleTag::Member);
        self.ctx.membership_repo().upsert(&membership).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Officer demoted");

        Ok(MembershipResponse::from(&membership))
    }

    /// Transfer ownership to an officer (actor: Owner). The two rows swap
    /// atomically: the target becomes Owner and the actor becomes Officer,
    /// or neither changes. The ledger re-checks both roles at commit time,
    /// so a concurrent demotion cannot produce zero or two owners.
    #[instrument(skip(self))]
    pub async fn transfer_ownership(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::TransferOwnership)
            .await?;

        self.require_target_role(club_id, target_id, RoleTag::Officer)
            .await?;

        self.ctx
            .membership_repo()
            .transfer_ownership(club_id, actor_id, target_id)
            .await?;

        info!(club_id = %club_id, old_owner = %actor_id, new_owner = %target_id, "Ownership transferred");

        Ok(())
    }

    /// Remove a user from the club: the generic catch-all behind kicking
    /// and leaving. Officers and the owner may remove others; anyone may
    /// remove themselves. The owner cannot be removed at all; ownership
    /// must be transferred first.
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);

        if actor_id != target_id {
            permission_service
                .authorize(club_id, actor_id, ClubAction::RemoveMember)
                .await?;
        } else if self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::not_found("Club", club_id.to_string()));
        }

        let membership = self
            .ctx
            .membership_repo()
            .find(club_id, target_id)
            .await?
            .ok_or(DomainError::MembershipNotFound)?;

        if membership.role == RoleTag::Owner {
            return Err(DomainError::CannotRemoveOwner.into());
        }

        self.ctx.membership_repo().delete(club_id, target_id).await?;

        info!(club_id = %club_id, user_id = %target_id, actor_id = %actor_id, "Removed from club");

        Ok(())
    }

    /// Fetch the target's row and insist on an exact current role.
    /// Missing row => NotFound; wrong role => conflict, not a denial.
    async fn require_target_role(
        &self,
        club_id: Snowflake,
        target_id: Snowflake,
        expected: RoleTag,
    ) -> ServiceResult<Membership> {
        let membership = self
            .ctx
            .membership_repo()
            .find(club_id, target_id)
            .await?
            .ok_or(DomainError::MembershipNotFound)?;

        if membership.role != expected {
            return Err(DomainError::RoleMismatch {
                expected,
                found: membership.role,
            }
            .into());
        }

        Ok(membership)
    }
}
