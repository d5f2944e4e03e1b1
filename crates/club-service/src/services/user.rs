//! User service
//!
//! Registration, profile queries and edits, and per-user club views.

use std::collections::HashSet;

use club_core::entities::{ExperienceLevel, User};
use club_core::value_objects::{RoleTag, Snowflake};
use club_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    ClubMembershipResponse, ClubResponse, RegisterUserRequest, UpdateProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<UserResponse> {
        let experience = ExperienceLevel::from_i16(request.experience_level)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(DomainError::UsernameTaken.into());
        }

        let mut user = User::new(
            self.ctx.generate_id(),
            request.username,
            request.first_name,
            request.last_name,
            experience,
        );
        if let Some(bio) = request.bio {
            user.bio = bio;
        }

        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, "User registered");

        Ok(UserResponse::from(&user))
    }

    /// Get a user's profile by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self.get_user_entity(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Edit the actor's own profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        actor_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.get_user_entity(actor_id).await?;
        let mut changed = false;

        if request.first_name.is_some() || request.last_name.is_some() {
            let first = request.first_name.unwrap_or_else(|| user.first_name.clone());
            let last = request.last_name.unwrap_or_else(|| user.last_name.clone());
            user.set_name(first, last);
            changed = true;
        }

        if let Some(bio) = request.bio {
            user.set_bio(bio);
            changed = true;
        }

        if let Some(level) = request.experience_level {
            user.set_experience(ExperienceLevel::from_i16(level)?);
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %actor_id, "Profile updated");
        }

        Ok(UserResponse::from(&user))
    }

    /// Clubs the user participates in (Member, Officer, or Owner rows)
    #[instrument(skip(self))]
    pub async fn clubs_of(&self, user_id: Snowflake) -> ServiceResult<Vec<ClubMembershipResponse>> {
        self.clubs_with_filter(user_id, RoleTag::is_participant).await
    }

    /// Clubs the user has a pending application with
    #[instrument(skip(self))]
    pub async fn applications_of(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ClubMembershipResponse>> {
        self.clubs_with_filter(user_id, |role| role == RoleTag::Applicant)
            .await
    }

    /// Clubs both users participate in
    #[instrument(skip(self))]
    pub async fn communal_clubs(
        &self,
        actor_id: Snowflake,
        other_id: Snowflake,
    ) -> ServiceResult<Vec<ClubResponse>> {
        self.get_user_entity(other_id).await?;

        let other_clubs: HashSet<Snowflake> = self
            .ctx
            .membership_repo()
            .find_by_user(other_id)
            .await?
            .into_iter()
            .filter(|m| m.role.is_participant())
            .map(|m| m.club_id)
            .collect();

        let mut shared = Vec::new();
        for row in self.ctx.membership_repo().find_by_user(actor_id).await? {
            if row.role.is_participant() && other_clubs.contains(&row.club_id) {
                if let Some(club) = self.ctx.club_repo().find_by_id(row.club_id).await? {
                    shared.push(ClubResponse::from(&club));
                }
            }
        }

        Ok(shared)
    }

    async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    async fn clubs_with_filter<F>(
        &self,
        user_id: Snowflake,
        filter: F,
    ) -> ServiceResult<Vec<ClubMembershipResponse>>
    where
        F: Fn(RoleTag) -> bool,
    {
        let rows = self.ctx.membership_repo().find_by_user(user_id).await?;
        let mut responses = Vec::new();

        for row in rows {
            if !filter(row.role) {
                continue;
            }
            if let Some(club) = self.ctx.club_repo().find_by_id(row.club_id).await? {
                responses.push(ClubMembershipResponse {
                    club: ClubResponse::from(&club),
                    role: row.role,
                    joined_at: row.joined_at,
                });
            }
        }

        Ok(responses)
    }
}
