//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateClubRequest, RegisterUserRequest, UpdateClubRequest, UpdateProfileRequest,
};
pub use responses::{
    ClubFeedResponse, ClubMembershipResponse, ClubOverviewResponse, ClubResponse, HealthResponse,
    MembershipResponse, ReadinessResponse, RosterEntryResponse, UserResponse,
};
