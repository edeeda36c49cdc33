//! Caller identity
//!
//! The "current user" is whatever the client puts in the `user_id` header.
//! Nothing verifies it; it is only compared for equality with stored owners.

use crate::error::ApiError;
use axum::http::request::Parts;
use daily_diet_shared::validation::normalize_owner_id;

/// Header carrying the caller's identifier
pub const CALLER_HEADER: &str = "user_id";

/// Unauthenticated caller identifier extracted from the `user_id` header
///
/// `None` when the header is absent or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerId(pub Option<String>);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(CALLER_HEADER) else {
            return Ok(CallerId(None));
        };

        let raw = value
            .to_str()
            .map_err(|_| ApiError::Validation(format!("{} header must be visible ASCII", CALLER_HEADER)))?;

        Ok(CallerId(normalize_owner_id(raw)))
    }
}
