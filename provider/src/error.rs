// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use reqwest::StatusCode;

/// Errors returned by LCD queries.
///
/// Callers that poll the ledger use [`LcdError::is_retryable`] to decide whether a
/// failure means "not there yet" or "stop asking".
#[derive(Debug, thiserror::Error)]
pub enum LcdError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The requested resource does not exist (yet).
    #[error("{url} not found")]
    NotFound { url: String },
    /// The LCD answered with a non-success status.
    #[error("{url} returned status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl LcdError {
    /// Returns true if the same request may succeed later.
    pub fn is_retryable(&self) -> bool {
        match self {
            LcdError::Transport { .. } | LcdError::NotFound { .. } => true,
            LcdError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            LcdError::Decode { .. } => false,
        }
    }
}
