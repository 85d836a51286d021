//! Domain error taxonomy shared by the db and api crates.

use crate::types::DbId;

/// Domain-level error for thesis administration operations.
///
/// Validation errors are detected before any state is mutated and carry the
/// exact message surfaced to the caller. Storage errors are fatal to the
/// current operation; the api layer is responsible for compensating cleanup
/// of any files materialized before the failure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Invalid input; no state was changed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state (e.g. already archived).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A file copy/save failed. Fatal to the current operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
