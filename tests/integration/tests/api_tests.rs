//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and the DATABASE_URL
//! environment variable; without it every test skips.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register a user and return (id, username)
async fn register_user(server: &TestServer) -> (String, String) {
    let request = RegisterUserRequest::unique();
    let response = server.post("/api/v1/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (user.id, user.username)
}

/// Create a club owned by `owner_id` and return its id
async fn create_club(server: &TestServer, owner_id: &str) -> String {
    let request = CreateClubRequest::unique();
    let response = server
        .post_as("/api/v1/clubs", owner_id, &request)
        .await
        .unwrap();
    let club: ClubResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    club.id
}

/// Register a user, apply them to the club, and have `owner_id` accept them
async fn join_as_member(server: &TestServer, club_id: &str, owner_id: &str) -> String {
    let (user_id, _) = register_user(server).await;
    let response = server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &user_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/applications/{user_id}/accept"),
            owner_id,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    user_id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUserRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.username, request.username);
    assert_eq!(user.experience_level, 1);
    assert_eq!(user.experience_label, "Beginner");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUserRequest::unique();

    server.post("/api/v1/users", &request).await.unwrap();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_non_email_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterUserRequest::unique();
    request.username = "not-an-email".to_string();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_identity_header_is_required() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Club Tests
// ============================================================================

#[tokio::test]
async fn test_create_club_makes_creator_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;

    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}"), &owner_id)
        .await
        .unwrap();
    let overview: ClubOverviewResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(overview.member_count, 1);
    assert_eq!(overview.viewer_standing.as_deref(), Some("member"));
    assert_eq!(overview.owner.unwrap().id, owner_id);
}

#[tokio::test]
async fn test_club_name_shape_is_enforced() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;

    let mut request = CreateClubRequest::unique();
    request.name = "A-b cd".to_string();

    let response = server
        .post_as("/api/v1/clubs", &owner_id, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_only_owner_can_delete_club() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;
    let member_id = join_as_member(&server, &club_id, &owner_id).await;

    let response = server
        .delete_as(&format!("/api/v1/clubs/{club_id}"), &member_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_as(&format!("/api/v1/clubs/{club_id}"), &owner_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}"), &owner_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Application Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_application_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let (applicant_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;

    // Apply
    let response = server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &applicant_id)
        .await
        .unwrap();
    let membership: MembershipResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(membership.role, "applicant");

    // A second apply while still pending is a conflict
    let response = server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &applicant_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // The owner sees the applicant in the queue
    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/applications"), &owner_id)
        .await
        .unwrap();
    let applicants: Vec<RosterEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(applicants.iter().any(|e| e.user.id == applicant_id));

    // Accept; the applicant becomes a member and leaves the queue
    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/applications/{applicant_id}/accept"),
            &owner_id,
        )
        .await
        .unwrap();
    let membership: MembershipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(membership.role, "member");

    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/members"), &owner_id)
        .await
        .unwrap();
    let members: Vec<RosterEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(members.iter().any(|e| e.user.id == applicant_id));

    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/applications"), &owner_id)
        .await
        .unwrap();
    let applicants: Vec<RosterEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(applicants.iter().all(|e| e.user.id != applicant_id));
}

#[tokio::test]
async fn test_applicant_cannot_see_member_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let (applicant_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;

    server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &applicant_id)
        .await
        .unwrap();

    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/members"), &applicant_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_ownership_transfer_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;
    let member_id = join_as_member(&server, &club_id, &owner_id).await;

    // Promote the member to officer
    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/members/{member_id}/promote"),
            &owner_id,
        )
        .await
        .unwrap();
    let membership: MembershipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(membership.role, "officer");

    // Transfer ownership to the officer
    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/officers/{member_id}/transfer"),
            &owner_id,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The new owner sees the old owner in the officer list
    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/officers"), &member_id)
        .await
        .unwrap();
    let officers: Vec<RosterEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(officers.iter().any(|e| e.user.id == owner_id));

    // The old owner is an officer now; a second transfer is denied
    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/officers/{member_id}/transfer"),
            &owner_id,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_ban_and_unban_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;
    let member_id = join_as_member(&server, &club_id, &owner_id).await;

    // Ban the member
    let response = server
        .post_empty_as(
            &format!("/api/v1/clubs/{club_id}/members/{member_id}/ban"),
            &owner_id,
        )
        .await
        .unwrap();
    let membership: MembershipResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(membership.role, "banned");

    // Banned users cannot re-apply
    let response = server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &member_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The ban list shows them
    let response = server
        .get_as(&format!("/api/v1/clubs/{club_id}/bans"), &owner_id)
        .await
        .unwrap();
    let banned: Vec<RosterEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(banned.iter().any(|e| e.user.id == member_id));

    // Unban removes the row; a fresh application goes through
    let response = server
        .delete_as(&format!("/api/v1/clubs/{club_id}/bans/{member_id}"), &owner_id)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &member_id)
        .await
        .unwrap();
    let membership: MembershipResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(membership.role, "applicant");
}

#[tokio::test]
async fn test_withdraw_application() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_id, _) = register_user(&server).await;
    let (applicant_id, _) = register_user(&server).await;
    let club_id = create_club(&server, &owner_id).await;

    server
        .post_empty_as(&format!("/api/v1/clubs/{club_id}/applications"), &applicant_id)
        .await
        .unwrap();

    let response = server
        .delete_as(
            &format!("/api/v1/clubs/{club_id}/applications/@me"),
            &applicant_id,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // No row left to withdraw
    let response = server
        .delete_as(
            &format!("/api/v1/clubs/{club_id}/applications/@me"),
            &applicant_id,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
