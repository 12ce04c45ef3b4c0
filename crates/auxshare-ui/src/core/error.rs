//! Failure taxonomy for backend calls.
//!
//! # Design
//! - Three cases: the server answered with an error, the request went out
//!   but nothing came back, or the request never made it out.
//! - Errors travel unchanged from the transport to the caller; only the
//!   session manager turns them into user-facing text.

use auxshare_api_models::ErrorBody;
use std::time::Duration;
use thiserror::Error;

/// Failure raised by a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// `detail` string from the error body, when present.
        detail: Option<String>,
    },
    /// The request was sent but no response arrived (includes timeouts).
    #[error("no response from server: {message}")]
    Network {
        /// Transport-level description.
        message: String,
    },
    /// The request could not be built, sent, or its response decoded.
    #[error("request failed: {message}")]
    Request {
        /// Description of what went wrong locally.
        message: String,
    },
}

impl ApiError {
    /// Build a response error from a status and a raw body.
    ///
    /// Bodies that are not JSON or carry no string `detail` yield no detail.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message().map(str::to_string));
        Self::Response { status, detail }
    }

    /// Build a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Build a local request error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Network error for a call that outlived its deadline.
    #[must_use]
    pub fn timed_out(timeout: Duration) -> Self {
        Self::network(format!("timed out after {}s", timeout.as_secs()))
    }

    /// Replace a transport failure with [`ApiError::timed_out`] when the
    /// deadline had already fired.
    #[must_use]
    pub fn unless_timed_out(self, expired: Option<Duration>) -> Self {
        expired.map_or(self, Self::timed_out)
    }

    /// Backend-provided detail message, only for response errors.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Response { detail, .. } => detail.as_deref(),
            Self::Network { .. } | Self::Request { .. } => None,
        }
    }

    /// HTTP status for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response { status, .. } => Some(*status),
            Self::Network { .. } | Self::Request { .. } => None,
        }
    }

    /// Message to show users: the backend detail, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}
