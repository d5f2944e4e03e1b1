//! Application handlers
//!
//! The application side of the membership lifecycle: apply, withdraw,
//! and the officer-facing applicant queue.

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{MembershipResponse, MembershipService, RosterEntryResponse, RosterService};

use crate::extractors::{ActorId, ClubIdPath, ClubUserPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Apply to a club
///
/// POST /clubs/{club_id}/applications
pub async fn apply(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Created<Json<MembershipResponse>>> {
    let club_id = path.club_id()?;

    let service = MembershipService::new(state.service_context());
    let response = service.apply(club_id, actor.user_id).await?;
    Ok(Created(Json(response)))
}

/// Withdraw the calling user's pending application
///
/// DELETE /clubs/{club_id}/applications/@me
pub async fn withdraw(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;

    let service = MembershipService::new(state.service_context());
    service.withdraw(club_id, actor.user_id).await?;
    Ok(NoContent)
}

/// Pending applicants (officers and the owner)
///
/// GET /clubs/{club_id}/applications
pub async fn list_applicants(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let club_id = path.club_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.applicants(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Accept an applicant as a member
///
/// POST /clubs/{club_id}/applications/{user_id}/accept
pub async fn accept_applicant(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<Json<MembershipResponse>> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    let response = service
        .accept_applicant(club_id, user_id, actor.user_id)
        .await?;
    Ok(Json(response))
}

/// Reject an applicant; their application row is removed
///
/// DELETE /clubs/{club_id}/applications/{user_id}
pub async fn reject_applicant(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    service
        .reject_applicant(club_id, user_id, actor.user_id)
        .await?;
    Ok(NoContent)
}
