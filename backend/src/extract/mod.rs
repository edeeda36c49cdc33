//! Request extractors
//!
//! The validation layer between raw HTTP input and the services:
//! bodies are parsed into the shared schemas and validated, path ids are
//! parsed, and the caller identifier is read from its header.

mod caller;
mod json;

pub use caller::{CallerId, CALLER_HEADER};
pub use json::{OptionalJson, ValidatedJson};

use crate::error::ApiError;
use daily_diet_shared::validation::parse_uuid;
use uuid::Uuid;

/// Parse a UUID path parameter, rejecting it as a validation error
pub fn uuid_param(raw: &str) -> Result<Uuid, ApiError> {
    parse_uuid(raw, "id").map_err(ApiError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_param() {
        let id = Uuid::new_v4();
        assert_eq!(uuid_param(&id.to_string()).unwrap(), id);
        assert!(matches!(uuid_param("42"), Err(ApiError::Validation(_))));
    }
}
