//! Club service
//!
//! Club creation, overview/feed queries, settings, and deletion.

use club_core::entities::{Club, Membership};
use club_core::value_objects::{ClubAction, RoleTag, Snowflake};
use club_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    ClubFeedResponse, ClubOverviewResponse, ClubResponse, CreateClubRequest, UpdateClubRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;
use super::roster::RosterService;

/// Club service
pub struct ClubService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubService<'a> {
    /// Create a new ClubService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new club. The creator's Owner membership row is written in
    /// the same atomic unit as the club itself: a club is never visible
    /// without exactly one owner.
    #[instrument(skip(self, request))]
    pub async fn create_club(
        &self,
        actor_id: Snowflake,
        request: CreateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        if !Club::name_is_valid(&request.name) {
            return Err(DomainError::InvalidClubName.into());
        }

        if self.ctx.club_repo().name_exists(&request.name).await? {
            return Err(DomainError::ClubNameTaken.into());
        }

        if self.ctx.user_repo().find_by_id(actor_id).await?.is_none() {
            return Err(ServiceError::not_found("User", actor_id.to_string()));
        }

        let club = Club::new(
            self.ctx.generate_id(),
            request.name,
            request.location,
            request.description,
        );
        let owner = Membership::new(club.id, actor_id, RoleTag::Owner);

        self.ctx.club_repo().create(&club, &owner).await?;

        info!(club_id = %club.id, owner_id = %actor_id, "Club created");

        Ok(ClubResponse::from(&club))
    }

    /// Get club by ID
    #[instrument(skip(self))]
    pub async fn get_club(&self, club_id: Snowflake) -> ServiceResult<ClubResponse> {
        let club = self.get_club_entity(club_id).await?;
        Ok(ClubResponse::from(&club))
    }

    /// Get club entity by ID
    #[instrument(skip(self))]
    pub async fn get_club_entity(&self, club_id: Snowflake) -> ServiceResult<Club> {
        self.ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))
    }

    /// Club detail page: owner, member count, and the viewer's collapsed
    /// standing (applicant / banned / member, absent for outsiders).
    #[instrument(skip(self))]
    pub async fn get_club_overview(
        &self,
        club_id: Snowflake,
        viewer_id: Snowflake,
    ) -> ServiceResult<ClubOverviewResponse> {
        let club = self.get_club_entity(club_id).await?;

        let owner = self.find_owner(club_id).await?;
        let member_count = self.ctx.membership_repo().count_by_club(club_id).await?;

        let viewer_standing = self
            .ctx
            .membership_repo()
            .find(club_id, viewer_id)
            .await?
            .map(|m| match m.role {
                RoleTag::Applicant => "applicant",
                RoleTag::Banned => "banned",
                RoleTag::Member | RoleTag::Officer | RoleTag::Owner => "member",
            });

        Ok(ClubOverviewResponse {
            club: ClubResponse::from(&club),
            owner,
            member_count,
            viewer_standing,
        })
    }

    /// Club feed for accepted participants: the full roster picture plus
    /// the applicant queue length.
    #[instrument(skip(self))]
    pub async fn get_club_feed(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<ClubFeedResponse> {
        let permission_service = PermissionService::new(self.ctx);
        let role = permission_service
            .authorize(club_id, actor_id, ClubAction::ViewFeed)
            .await?;
        let viewer_role = role.ok_or_else(|| ServiceError::internal("authorized without role"))?;

        let club = self.get_club_entity(club_id).await?;
        let roster = RosterService::new(self.ctx);

        let owner = self.find_owner(club_id).await?;
        let officers = roster.users_with_role(club_id, RoleTag::Officer).await?;
        let members = roster.users_with_role(club_id, RoleTag::Member).await?;
        let applicant_count = self
            .ctx
            .membership_repo()
            .find_by_role(club_id, RoleTag::Applicant)
            .await?
            .len() as i64;

        Ok(ClubFeedResponse {
            club: ClubResponse::from(&club),
            owner,
            officers,
            members,
            applicant_count,
            viewer_role,
        })
    }

    /// Club directory listing, newest first
    #[instrument(skip(self))]
    pub async fn list_clubs(
        &self,
        limit: i64,
        after: Option<Snowflake>,
    ) -> ServiceResult<Vec<ClubResponse>> {
        let clubs = self.ctx.club_repo().list(limit, after).await?;
        Ok(clubs.iter().map(ClubResponse::from).collect())
    }

    /// Update club settings (actor: Owner)
    #[instrument(skip(self, request))]
    pub async fn update_club(
        &self,
        club_id: Snowflake,
        actor_id: Snowflake,
        request: UpdateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::EditClub)
            .await?;

        let mut club = self.get_club_entity(club_id).await?;
        let mut changed = false;

        if let Some(name) = request.name {
            if !Club::name_is_valid(&name) {
                return Err(DomainError::InvalidClubName.into());
            }
            if name != club.name && self.ctx.club_repo().name_exists(&name).await? {
                return Err(DomainError::ClubNameTaken.into());
            }
            club.set_name(name);
            changed = true;
        }

        if let Some(location) = request.location {
            club.set_location(location);
            changed = true;
        }

        if let Some(description) = request.description {
            club.set_description(description);
            changed = true;
        }

        if changed {
            self.ctx.club_repo().update(&club).await?;
            info!(club_id = %club_id, actor_id = %actor_id, "Club updated");
        }

        Ok(ClubResponse::from(&club))
    }

    /// Delete a club (actor: Owner). Every membership row goes with it.
    #[instrument(skip(self))]
    pub async fn delete_club(&self, club_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .authorize(club_id, actor_id, ClubAction::DeleteClub)
            .await?;

        self.ctx.club_repo().delete(club_id).await?;

        info!(club_id = %club_id, actor_id = %actor_id, "Club deleted");

        Ok(())
    }

    /// Resolve the club's owner to a user response, if the row and the
    /// user record both exist.
    async fn find_owner(&self, club_id: Snowflake) -> ServiceResult<Option<UserResponse>> {
        let owners = self
            .ctx
            .membership_repo()
            .find_by_role(club_id, RoleTag::Owner)
            .await?;

        let Some(owner_row) = owners.first() else {
            return Ok(None);
        };

        let user = self.ctx.user_repo().find_by_id(owner_row.user_id).await?;
        Ok(user.as_ref().map(UserResponse::from))
    }
}
