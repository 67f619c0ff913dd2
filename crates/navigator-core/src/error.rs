// SPDX-FileCopyrightText: 2026 Navigator Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Navigator mentor engine.

use thiserror::Error;

/// The primary error type used across all Navigator traits and core operations.
///
/// The taxonomy mirrors how failures degrade: validation errors surface
/// immediately before any external call, model errors fail the request,
/// storage errors are swallowed at the call sites that can tolerate them,
/// and tool errors collapse into structured payloads inside the tool round.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// Malformed or missing request fields. Surfaced before any external call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Completion call failed, timed out, or yielded no usable choice.
    #[error("model error: {message}")]
    Model {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Embedding or persistence failure (database connection, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A tool handler failed. Never propagates past the registry boundary.
    #[error("tool error: {message}")]
    Tool { message: String },

    /// Configuration errors (invalid TOML, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl NavigatorError {
    /// Wraps an arbitrary error (or message) as a storage failure.
    pub fn storage<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        NavigatorError::Storage {
            source: source.into(),
        }
    }

    /// Builds a model error without an underlying source.
    pub fn model(message: impl Into<String>) -> Self {
        NavigatorError::Model {
            message: message.into(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_construct_and_display() {
        let errs = [
            NavigatorError::Validation("missing userMessage".into()),
            NavigatorError::model("no choice"),
            NavigatorError::storage(std::io::Error::other("disk full")),
            NavigatorError::Tool {
                message: "handler panicked".into(),
            },
            NavigatorError::Config("bad threshold".into()),
            NavigatorError::Timeout {
                duration: std::time::Duration::from_secs(60),
            },
            NavigatorError::Internal("unreachable".into()),
        ];
        for e in &errs {
            assert!(!e.to_string().is_empty());
        }
    }

    #[test]
    fn storage_error_preserves_source() {
        let err = NavigatorError::storage(std::io::Error::other("locked"));
        assert!(err.to_string().contains("locked"));
    }
}
