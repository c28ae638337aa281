//! Caller-facing error taxonomy for the person directory.

use crate::model::{PersonId, ValidationError};
use crate::registry::RegistryError;
use thiserror::Error;

/// Errors a directory caller can observe.
///
/// All variants are local to a single request: none corrupts registry state
/// and none requires a restart. The boundary layer maps these to its own
/// failure responses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersonError {
    /// No record exists under the given identifier.
    #[error("Person not found: {0}")]
    NotFound(PersonId),

    /// The capability is intentionally unfinished; distinct from
    /// [`PersonError::NotFound`] so callers can tell "no such record" from
    /// "operation unsupported".
    #[error("Operation not supported: {0}")]
    NotImplemented(&'static str),

    /// Construction input was rejected; the payload names the offending
    /// field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The registry task is unreachable.
    #[error("Registry communication error: {0}")]
    Registry(String),
}

impl From<RegistryError> for PersonError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::NotFound(id) => PersonError::NotFound(id),
            RegistryError::NotImplemented(op) => PersonError::NotImplemented(op),
            RegistryError::Validation(v) => PersonError::Validation(v),
            other => PersonError::Registry(other.to_string()),
        }
    }
}
