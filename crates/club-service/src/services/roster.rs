//! Roster service
//!
//! Role-filtered list queries over the ledger, joined with user records:
//! applicant queue, member list, officer list, ban list, and member search.

use club_core::entities::Membership;
use club_core::value_objects::{ClubAction, RoleTag, Snowflake};
use tracing::instrument;

use crate::dto::{RosterEntryResponse, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Pending applicants (actor: Officer/Owner)
    #[instrument(skip(self))]
    pub async fn applicants(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::ViewApplicants)
            .await?;

        self.entries_with_role(club_id, RoleTag::Applicant).await
    }

    /// Accepted members, not counting officers or the owner
    /// (actor: any participant)
    #[instrument(skip(self))]
    pub async fn members(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::ViewMembers)
            .await?;

        self.entries_with_role(club_id, RoleTag::Member).await
    }

    /// Officer list (actor: Owner)
    #[instrument(skip(self))]
    pub async fn officers(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::ViewOfficers)
            .await?;

        self.entries_with_role(club_id, RoleTag::Officer).await
    }

    /// Banned users. Visible to whoever could lift the ban.
    #[instrument(skip(self))]
    pub async fn banned(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::UnbanMember)
            .await?;

        self.entries_with_role(club_id, RoleTag::Banned).await
    }

    /// Search accepted participants by name substring, case-insensitive,
    /// matched against "first last" (actor: any participant)
    #[instrument(skip(self))]
    pub async fn search_members(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
        query: &str,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::SearchMembers)
            .await?;

        let rows = self.ctx.membership_repo().find_by_club(club_id).await?;
        let participants: Vec<Membership> = rows
            .into_iter()
            .filter(|m| m.role.is_participant())
            .collect();

        let needle = query.trim().to_lowercase();
        let mut entries = self.join_users(participants).await?;
        if !needle.is_empty() {
            entries.retain(|entry| {
                let full_name =
                    format!("{} {}", entry.user.first_name, entry.user.last_name).to_lowercase();
                full_name.contains(&needle)
            });
        }

        Ok(entries)
    }

    /// Users holding exactly `role`, as bare user responses (feed helper)
    pub(crate) async fn users_with_role(
        &self,
        club_id: Snowflake,
        role: RoleTag,
    ) -> ServiceResult<Vec<UserResponse>> {
        let entries = self.entries_with_role(club_id, role).await?;
        Ok(entries.into_iter().map(|e| e.user).collect())
    }

    /// Ledger rows with exactly `role`, joined with user records
    async fn entries_with_role(
        &self,
        club_id: Snowflake,
        role: RoleTag,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let rows = self.ctx.membership_repo().find_by_role(club_id, role).await?;
        self.join_users(rows).await
    }

    /// Join ledger rows with their user records, skipping rows whose user
    /// record is missing.
    async fn join_users(
        &self,
        rows: Vec<Membership>,
    ) -> ServiceResult<Vec<RosterEntryResponse>> {
        let mut entries = Vec::with_capacity(rows.len());

        for row in rows {
            if let Some(user) = self.ctx.user_repo().find_by_id(row.user_id).await? {
                entries.push(RosterEntryResponse {
                    user: UserResponse::from(&user),
                    role: row.role,
                    joined_at: row.joined_at,
                });
            }
        }

        Ok(entries)
    }
}
