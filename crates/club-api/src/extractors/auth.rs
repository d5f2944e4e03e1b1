//! Actor identity extractor
//!
//! Authentication (passwords, sessions, token issuance) lives in the
//! fronting proxy, which injects the verified caller id into every request
//! as the `x-actor-id` header. This extractor materializes that header as
//! an explicit actor parameter; nothing downstream reads ambient identity
//! state.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use club_core::Snowflake;

use crate::response::ApiError;

/// Header carrying the authenticated caller's user id
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Authenticated actor extracted from the identity header
#[derive(Debug, Clone, Copy)]
pub struct ActorId {
    /// User ID asserted by the authenticating proxy
    pub user_id: Snowflake,
}

impl ActorId {
    /// Create a new ActorId
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActorId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(ACTOR_ID_HEADER)
            .ok_or(ApiError::MissingIdentity)?;

        let user_id = value
            .to_str()
            .ok()
            .and_then(|s| s.parse::<Snowflake>().ok())
            .ok_or(ApiError::InvalidIdentity)?;

        Ok(ActorId::new(user_id))
    }
}
