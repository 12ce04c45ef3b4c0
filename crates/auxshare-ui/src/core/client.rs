//! Backend API contract and the shared failure logger.
//!
//! # Design
//! - One trait method per backend endpoint; the browser transport lives in
//!   `services::api` and tests script their own implementation.
//! - Every failed call goes through [`log_failure`] exactly once, in the
//!   transport's single request funnel. Errors are never rewritten.

use crate::core::error::ApiError;
use async_trait::async_trait;
use auxshare_api_models::{ConvertResponse, PlatformInfo, SessionResponse, SessionTtl};
use serde_json::Value;

/// Operations offered by the playlist backend.
#[async_trait(?Send)]
pub trait PlaylistApi {
    /// Extract the tracks of a playlist without converting it.
    async fn extract_playlist(&self, url: &str) -> Result<Value, ApiError>;

    /// Convert a playlist to `target_platform` and store it as a session.
    async fn convert_playlist(
        &self,
        url: &str,
        target_platform: &str,
    ) -> Result<ConvertResponse, ApiError>;

    /// Fetch a stored session by code.
    async fn get_session(&self, code: &str) -> Result<SessionResponse, ApiError>;

    /// Remaining lifetime of a stored session.
    async fn get_session_ttl(&self, code: &str) -> Result<SessionTtl, ApiError>;

    /// Every platform the backend knows.
    async fn get_supported_platforms(&self) -> Result<Vec<PlatformInfo>, ApiError>;

    /// Platforms playlists can be extracted from.
    async fn get_supported_sources(&self) -> Result<Vec<PlatformInfo>, ApiError>;

    /// Platforms playlists can be converted to.
    async fn get_supported_targets(&self) -> Result<Vec<PlatformInfo>, ApiError>;

    /// Backend banner from `GET /`.
    async fn health_check(&self) -> Result<Value, ApiError>;
}

/// HTTP verb used by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl Method {
    /// Upper-case verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Backend endpoints addressed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `POST /api/extract-playlist`
    ExtractPlaylist,
    /// `POST /api/convert`
    Convert,
    /// `GET /api/session/{code}`
    Session(&'a str),
    /// `GET /api/session/{code}/ttl`
    SessionTtl(&'a str),
    /// `GET /api/platforms`
    Platforms,
    /// `GET /api/platforms/sources`
    PlatformSources,
    /// `GET /api/platforms/targets`
    PlatformTargets,
    /// `GET /`
    Health,
}

impl Endpoint<'_> {
    /// Verb for the endpoint.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::ExtractPlaylist | Self::Convert => Method::Post,
            Self::Session(_)
            | Self::SessionTtl(_)
            | Self::Platforms
            | Self::PlatformSources
            | Self::PlatformTargets
            | Self::Health => Method::Get,
        }
    }

    /// Request path; session codes are encoded as a single path segment.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::ExtractPlaylist => "/api/extract-playlist".to_string(),
            Self::Convert => "/api/convert".to_string(),
            Self::Session(code) => format!("/api/session/{}", urlencoding::encode(code)),
            Self::SessionTtl(code) => format!("/api/session/{}/ttl", urlencoding::encode(code)),
            Self::Platforms => "/api/platforms".to_string(),
            Self::PlatformSources => "/api/platforms/sources".to_string(),
            Self::PlatformTargets => "/api/platforms/targets".to_string(),
            Self::Health => "/".to_string(),
        }
    }
}

/// Log line for a failed call.
#[must_use]
pub fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Response { status, detail } => match detail {
            Some(detail) => format!("API error: {detail}"),
            None => format!("API error: HTTP {status}"),
        },
        ApiError::Network { .. } => "Network error: no response from server".to_string(),
        ApiError::Request { message } => format!("Error: {message}"),
    }
}

/// Log a failed call. The error itself is left for the caller to handle.
pub fn log_failure(endpoint: &Endpoint<'_>, err: &ApiError) {
    let method = endpoint.method().as_str();
    let path = endpoint.path();
    let message = failure_message(err);
    match err {
        ApiError::Response { status, .. } => {
            tracing::error!(method, path = %path, status = *status, "{message}");
        }
        ApiError::Network { message: cause } => {
            tracing::error!(method, path = %path, cause = %cause, "{message}");
        }
        ApiError::Request { .. } => {
            tracing::error!(method, path = %path, "{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_backend_routes() {
        let cases = [
            (Endpoint::ExtractPlaylist, Method::Post, "/api/extract-playlist"),
            (Endpoint::Convert, Method::Post, "/api/convert"),
            (Endpoint::Session("4821"), Method::Get, "/api/session/4821"),
            (Endpoint::SessionTtl("4821"), Method::Get, "/api/session/4821/ttl"),
            (Endpoint::Platforms, Method::Get, "/api/platforms"),
            (Endpoint::PlatformSources, Method::Get, "/api/platforms/sources"),
            (Endpoint::PlatformTargets, Method::Get, "/api/platforms/targets"),
            (Endpoint::Health, Method::Get, "/"),
        ];
        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "{endpoint:?}");
            assert_eq!(endpoint.path(), path, "{endpoint:?}");
        }
    }

    #[test]
    fn session_code_is_encoded_as_one_segment() {
        assert_eq!(
            Endpoint::Session("a b/c").path(),
            "/api/session/a%20b%2Fc"
        );
    }

    #[test]
    fn failure_messages_distinguish_the_three_cases() {
        assert_eq!(
            failure_message(&ApiError::from_response(404, r#"{"detail":"Session not found"}"#)),
            "API error: Session not found"
        );
        assert_eq!(
            failure_message(&ApiError::from_response(500, "")),
            "API error: HTTP 500"
        );
        assert_eq!(
            failure_message(&ApiError::network("timeout")),
            "Network error: no response from server"
        );
        assert_eq!(
            failure_message(&ApiError::request("invalid header")),
            "Error: invalid header"
        );
    }

    #[test]
    fn logging_a_failure_does_not_panic_without_subscriber() {
        log_failure(&Endpoint::Convert, &ApiError::network("timeout"));
    }
}
