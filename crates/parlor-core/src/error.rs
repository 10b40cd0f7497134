// SPDX-FileCopyrightText: 2026 Parlor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Parlor chat backend.

use thiserror::Error;

/// The primary error type used across all Parlor crates.
///
/// The Conflict / Unauthorized / NotFound / Validation variants are the
/// caller-visible failure taxonomy; the gateway maps them to HTTP status
/// codes. The remaining variants cover ambient failures (config, storage).
#[derive(Debug, Error)]
pub enum ParlorError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, migration).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A uniqueness constraint was violated, e.g. a duplicate username.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credentials are absent or do not match.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "conversation".
        kind: &'static str,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// Malformed or out-of-bounds input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ParlorError {
    /// Shorthand for a [`ParlorError::NotFound`] with an owned id.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        ParlorError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
