//! Member handlers
//!
//! Roster queries, member search, discipline (ban/unban), promotion,
//! removal, and leaving.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use club_service::{MembershipResponse, MembershipService, RosterEntryResponse, RosterService};
use serde::Deserialize;

use crate::extractors::{ActorId, ClubIdPath, ClubUserPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Query parameters for member search
#[derive(Debug, Deserialize)]
pub struct MemberSearchParams {
    #[serde(default)]
    pub name: String,
}

/// Member list (any accepted participant)
///
/// GET /clubs/{club_id}/members
pub async fn get_members(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let club_id = path.club_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.members(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Search participants by name
///
/// GET /clubs/{club_id}/members/search?name=...
pub async fn search_members(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
    Query(params): Query<MemberSearchParams>,
) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let club_id = path.club_id()?;

    let service = RosterService::new(state.service_context());
    let response = service
        .search_members(club_id, actor.user_id, &params.name)
        .await?;
    Ok(Json(response))
}

/// Leave the club (self-removal; the owner must transfer first)
///
/// DELETE /clubs/{club_id}/members/@me
pub async fn leave_club(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;

    let service = MembershipService::new(state.service_context());
    service
        .remove_member(club_id, actor.user_id, actor.user_id)
        .await?;
    Ok(NoContent)
}

/// Remove a user from the club (officers and the owner)
///
/// DELETE /clubs/{club_id}/members/{user_id}
pub async fn remove_member(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    service
        .remove_member(club_id, user_id, actor.user_id)
        .await?;
    Ok(NoContent)
}

/// Ban a member
///
/// POST /clubs/{club_id}/members/{user_id}/ban
pub async fn ban_member(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<Json<MembershipResponse>> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    let response = service.ban_member(club_id, user_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Promote a member to officer
///
/// POST /clubs/{club_id}/members/{user_id}/promote
pub async fn promote_member(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<Json<MembershipResponse>> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    let response = service
        .promote_member(club_id, user_id, actor.user_id)
        .await?;
    Ok(Json(response))
}

/// Banned users (visible to whoever can lift bans)
///
/// GET /clubs/{club_id}/bans
pub async fn get_banned(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let club_id = path.club_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.banned(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Lift a ban; the user must re-apply from scratch afterwards
///
/// DELETE /clubs/{club_id}/bans/{user_id}
pub async fn unban_member(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    service
        .unban_member(club_id, user_id, actor.user_id)
        .await?;
    Ok(NoContent)
}
