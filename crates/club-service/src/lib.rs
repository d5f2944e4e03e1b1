//! # club-service
//!
//! Application layer containing the membership lifecycle operations,
//! permission checks, roster queries, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    ClubFeedResponse, ClubMembershipResponse, ClubOverviewResponse, ClubResponse,
    CreateClubRequest, HealthResponse, MembershipResponse, ReadinessResponse,
    RegisterUserRequest, RosterEntryResponse, UpdateClubRequest, UpdateProfileRequest,
    UserResponse,
};
pub use services::{
    ClubService, MembershipService, PermissionService, RosterService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
