// SPDX-FileCopyrightText: 2026 Vibracode Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Vibracode admin client.

use thiserror::Error;

/// The primary error type used across the Vibracode admin crates.
///
/// The transport layer distinguishes network, status, and decode failures;
/// the lenient fetcher/mutator layer collapses all three into empty-list or
/// boolean-false results for callers that do not care which one occurred.
#[derive(Debug, Error)]
pub enum VibracodeError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request never produced a response (DNS, connect, timeout).
    #[error("http error: {message}")]
    Http {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let status = VibracodeError::Status {
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(status.to_string(), "backend returned 401: unauthorized");

        let http = VibracodeError::Http {
            message: "connection refused".into(),
            source: None,
        };
        assert!(http.to_string().contains("connection refused"));
    }
}
