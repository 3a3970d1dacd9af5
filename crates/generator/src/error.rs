// Copyright 2026 UML Ontology Bench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for ontology generation.

use thiserror::Error;

/// Errors that can occur during an ontology generation attempt.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The UML input was empty or whitespace-only; no call was attempted.
    #[error("UML input cannot be empty")]
    EmptyUml,

    /// Transport or API-level failure while talking to the chat backend.
    #[error("chat API error: {message}")]
    Api {
        /// Human-readable description of the failure.
        message: String,
        /// Original cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The reply did not expose the expected message content.
    #[error("malformed chat response: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    /// Wrap an upstream failure with a human-readable description.
    pub fn api(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// An API-level failure with no underlying error value (e.g. an HTTP
    /// error status).
    pub fn api_message(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source: None,
        }
    }
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
