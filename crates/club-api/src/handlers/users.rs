//! User handlers
//!
//! Registration, profiles, and per-user club views.

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{
    ClubMembershipResponse, ClubResponse, RegisterUserRequest, UpdateProfileRequest, UserResponse,
    UserService,
};

use crate::extractors::{ActorId, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Get the calling user's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    actor: ActorId,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(actor.user_id).await?;
    Ok(Json(response))
}

/// Edit the calling user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    actor: ActorId,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(actor.user_id, request).await?;
    Ok(Json(response))
}

/// Get another user's profile
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _actor: ActorId,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Clubs the calling user participates in
///
/// GET /users/@me/clubs
pub async fn get_current_user_clubs(
    State(state): State<AppState>,
    actor: ActorId,
) -> ApiResult<Json<Vec<ClubMembershipResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.clubs_of(actor.user_id).await?;
    Ok(Json(response))
}

/// Clubs the calling user has pending applications with
///
/// GET /users/@me/applications
pub async fn get_current_user_applications(
    State(state): State<AppState>,
    actor: ActorId,
) -> ApiResult<Json<Vec<ClubMembershipResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.applications_of(actor.user_id).await?;
    Ok(Json(response))
}

/// Clubs shared between the calling user and another user
///
/// GET /users/{user_id}/communal-clubs
pub async fn get_communal_clubs(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<ClubResponse>>> {
    let user_id = path.user_id()?;

    let service = UserService::new(state.service_context());
    let response = service.communal_clubs(actor.user_id, user_id).await?;
    Ok(Json(response))
}
