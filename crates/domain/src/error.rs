//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FlatshopError`] via `From`.

use std::error::Error;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum FlatshopError {
    /// The caller supplied input that could not be interpreted.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A single-entity lookup found nothing.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed (connectivity, constraint, query).
    #[error("storage error")]
    Storage(Box<dyn Error + Send + Sync>),
}

/// Input that could not be turned into a domain value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A path identifier is not a valid integer.
    #[error("invalid {kind} id: {value:?}")]
    InvalidId {
        /// Which identifier was being parsed (`apartment`, `user`, …).
        kind: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// The request body does not have the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// A lookup by id matched no row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `Apartment`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
