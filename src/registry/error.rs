//! Error type for registry operations.

use crate::model::{PersonId, ValidationError};

/// Errors surfaced by the registry and its channel plumbing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// The registry task is gone and the request channel is closed.
    #[error("Registry closed")]
    RegistryClosed,

    /// The registry dropped the response channel before answering.
    #[error("Registry dropped response channel")]
    RegistryDropped,

    /// No record exists under the given identifier.
    #[error("Person not found: {0}")]
    NotFound(PersonId),

    /// The operation is deliberately unfinished, not missing by accident.
    #[error("Operation not supported: {0}")]
    NotImplemented(&'static str),

    /// Construction input was rejected; no record was created and no
    /// identifier was consumed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
