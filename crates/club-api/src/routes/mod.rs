//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{applications, clubs, health, members, officers, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(club_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register))
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/clubs", get(users::get_current_user_clubs))
        .route("/users/@me/applications", get(users::get_current_user_applications))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/communal-clubs", get(users::get_communal_clubs))
}

/// Club routes
fn club_routes() -> Router<AppState> {
    Router::new()
        // Club CRUD
        .route("/clubs", post(clubs::create_club))
        .route("/clubs", get(clubs::list_clubs))
        .route("/clubs/:club_id", get(clubs::get_club))
        .route("/clubs/:club_id", patch(clubs::update_club))
        .route("/clubs/:club_id", delete(clubs::delete_club))
        .route("/clubs/:club_id/feed", get(clubs::get_club_feed))
        // Applications
        .route("/clubs/:club_id/applications", post(applications::apply))
        .route("/clubs/:club_id/applications", get(applications::list_applicants))
        .route("/clubs/:club_id/applications/@me", delete(applications::withdraw))
        .route(
            "/clubs/:club_id/applications/:user_id/accept",
            post(applications::accept_applicant),
        )
        .route(
            "/clubs/:club_id/applications/:user_id",
            delete(applications::reject_applicant),
        )
        // Members
        .route("/clubs/:club_id/members", get(members::get_members))
        .route("/clubs/:club_id/members/search", get(members::search_members))
        .route("/clubs/:club_id/members/@me", delete(members::leave_club))
        .route("/clubs/:club_id/members/:user_id", delete(members::remove_member))
        .route("/clubs/:club_id/members/:user_id/ban", post(members::ban_member))
        .route(
            "/clubs/:club_id/members/:user_id/promote",
            post(members::promote_member),
        )
        // Bans
        .route("/clubs/:club_id/bans", get(members::get_banned))
        .route("/clubs/:club_id/bans/:user_id", delete(members::unban_member))
        // Officers
        .route("/clubs/:club_id/officers", get(officers::list_officers))
        .route(
            "/clubs/:club_id/officers/:user_id/demote",
            post(officers::demote_officer),
        )
        .route(
            "/clubs/:club_id/officers/:user_id/transfer",
            post(officers::transfer_ownership),
        )
}
