//! Club handlers
//!
//! Club creation, directory, overview, feed, settings, and deletion.

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::{
    ClubFeedResponse, ClubOverviewResponse, ClubResponse, ClubService, CreateClubRequest,
    UpdateClubRequest,
};

use crate::extractors::{ActorId, ClubIdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new club; the creator becomes its owner
///
/// POST /clubs
pub async fn create_club(
    State(state): State<AppState>,
    actor: ActorId,
    ValidatedJson(request): ValidatedJson<CreateClubRequest>,
) -> ApiResult<Created<Json<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let response = service.create_club(actor.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Club directory listing
///
/// GET /clubs
pub async fn list_clubs(
    State(state): State<AppState>,
    _actor: ActorId,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let response = service.list_clubs(pagination.limit, pagination.after).await?;
    Ok(Json(response))
}

/// Club overview with owner, member count, and viewer standing
///
/// GET /clubs/{club_id}
pub async fn get_club(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<ClubOverviewResponse>> {
    let club_id = path.club_id()?;

    let service = ClubService::new(state.service_context());
    let response = service.get_club_overview(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Club feed for accepted participants
///
/// GET /clubs/{club_id}/feed
pub async fn get_club_feed(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<Json<ClubFeedResponse>> {
    let club_id = path.club_id()?;

    let service = ClubService::new(state.service_context());
    let response = service.get_club_feed(club_id, actor.user_id).await?;
    Ok(Json(response))
}

/// Update club settings (owner only)
///
/// PATCH /clubs/{club_id}
pub async fn update_club(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateClubRequest>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = path.club_id()?;

    let service = ClubService::new(state.service_context());
    let response = service.update_club(club_id, actor.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a club and all of its membership rows (owner only)
///
/// DELETE /clubs/{club_id}
pub async fn delete_club(
    State(state): State<AppState>,
    actor: ActorId,
    Path(path): Path<ClubIdPath>,
) -> ApiResult<NoContent> {
    let club_id = path.club_id()?;

    let service = ClubService::new(state.service_context());
    service.delete_club(club_id, actor.user_id).await?;
    Ok(NoContent)
}
