//! JSON bodies checked against the shared schemas

use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use daily_diet_shared::validation::describe_errors;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and validated
///
/// Malformed JSON, missing or wrongly typed fields and failed validation
/// rules all reject with [`ApiError::Validation`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(describe_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Optional JSON body
///
/// An empty (or whitespace-only) body yields `None`. Anything else must
/// parse and validate exactly like [`ValidatedJson`].
#[derive(Debug, Clone)]
pub struct OptionalJson<T>(pub Option<T>);

#[axum::async_trait]
impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        parse_optional(&bytes).map(Self)
    }
}

fn parse_optional<T>(bytes: &[u8]) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: T = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::Validation(format!("Invalid JSON body: {}", e)))?;
    value
        .validate()
        .map_err(|errors| ApiError::Validation(describe_errors(&errors)))?;

    Ok(Some(value))
}
