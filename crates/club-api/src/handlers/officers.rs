//! Officer handlers
//!
//! Owner-only officer administration: listing, demotion, and the atomic
//! ownership transfer.

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{MembershipResponse, MembershipService, RosterEntryResponse, RosterService};

use crate::extractors::{ActorId, ClubIdPath, ClubUserPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Officer list (owner only)
///
/// GET /clubs/{club_id}/officers
pub async fn list_officers(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<Vec<RosterEntryResponse>>> {
    let club_id = path.club_id()?;

    let service = RosterService::new(state.service_context());
    let response = service.officers(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Demote an officer back to member (owner only)
///
/// POST /clubs/{club_id}/officers/{user_id}/demote
pub async fn demote_officer(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<Json<MembershipResponse>> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    let response = service
        .demote_officer(club_id, user_id, actor.user_id)
        .await?;
    Ok(Json(response))
}

/// Transfer ownership to an officer (owner only); the caller becomes an
/// officer in the same atomic swap
///
/// POST /clubs/{club_id}/officers/{user_id}/transfer
pub async fn transfer_ownership(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubUserPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;
    let user_id = path.user_id()?;

    let service = MembershipService::new(state.service_context());
    service
        .transfer_ownership(club_id, user_id, actor.user_id)
        .await?;
    Ok(NoContent)
}
