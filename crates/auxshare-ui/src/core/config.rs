//! Client configuration resolved at build time.
//!
//! # Design
//! - The backend address is baked in with `AUXSHARE_API_URL`; blank or
//!   missing values use the local development backend.
//! - The timeout is fixed; playlist conversion can take minutes.

use std::time::Duration;

/// Backend address used when `AUXSHARE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Per-request timeout for every backend call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(180);

/// Build-time log filter directive, default `info`.
pub const LOG_DIRECTIVE: Option<&str> = option_env!("AUXSHARE_LOG");

const API_URL_ENV: Option<&str> = option_env!("AUXSHARE_API_URL");

/// Settings for the HTTP client wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub base_url: String,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    /// Configuration from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(API_URL_ENV.unwrap_or(DEFAULT_API_URL))
    }

    /// Configuration for an explicit base URL.
    #[must_use]
    pub fn with_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Absolute URL for an API path starting with `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
