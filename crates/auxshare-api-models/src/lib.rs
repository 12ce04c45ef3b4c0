#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! Shared HTTP DTOs for the AuxShare playlist API.
//!
//! The backend owns the track schema; tracks are kept as opaque JSON objects
//! and only read through the accessors on [`PlaylistTrack`]. Everything else
//! mirrors the JSON the backend emits so the UI can decode responses without
//! hand-written mapping.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Platform used as conversion target when the caller does not pick one.
pub const DEFAULT_TARGET_PLATFORM: &str = "youtube_music";

/// Body for `POST /api/extract-playlist`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractRequest {
    /// Source playlist URL.
    pub url: String,
}

/// Body for `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertRequest {
    /// Source playlist URL.
    pub url: String,
    /// Platform identifier to match tracks against.
    pub target_platform: String,
}

impl ConvertRequest {
    /// Build a request, falling back to [`DEFAULT_TARGET_PLATFORM`] for a blank target.
    #[must_use]
    pub fn new(url: impl Into<String>, target_platform: impl Into<String>) -> Self {
        let target_platform = target_platform.into();
        let target_platform = if target_platform.trim().is_empty() {
            DEFAULT_TARGET_PLATFORM.to_string()
        } else {
            target_platform
        };
        Self {
            url: url.into(),
            target_platform,
        }
    }
}

/// Matching statistics computed by the backend for a converted playlist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MatchStats {
    /// Number of source tracks.
    pub total: u32,
    /// Tracks matched on the target platform.
    pub matched: u32,
    /// Tracks without a match.
    pub failed: u32,
    /// Matched fraction in the range 0.0-1.0.
    pub match_rate: f64,
    /// Mean confidence across matched tracks.
    pub avg_confidence: f64,
    /// Tracks matched with confidence of at least 0.9.
    pub high_confidence: u32,
    /// Tracks matched with confidence between 0.7 and 0.9.
    pub medium_confidence: u32,
    /// Matched tracks below 0.7 confidence.
    pub low_confidence: u32,
}

/// Response from `POST /api/convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertResponse {
    /// Session code the converted playlist is stored under.
    pub code: String,
    /// Shareable join URL built by the backend.
    pub share_url: String,
    /// Match statistics for the conversion.
    #[serde(default)]
    pub stats: MatchStats,
    /// Platform the source URL belonged to.
    pub source_platform: String,
    /// Platform the tracks were matched against.
    pub target_platform: String,
}

/// Response from `GET /api/session/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    /// Converted tracks in playlist order.
    #[serde(default)]
    pub tracks: Vec<PlaylistTrack>,
    /// Statistics recalculated by the backend for the stored tracks.
    #[serde(default)]
    pub stats: MatchStats,
    /// Platform the tracks were matched against.
    pub target_platform: String,
    /// Platform the playlist was extracted from, when recorded.
    #[serde(default)]
    pub source_platform: Option<String>,
}

/// Response from `GET /api/session/{code}/ttl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionTtl {
    /// Session code the TTL belongs to.
    pub code: String,
    /// Remaining lifetime in seconds.
    pub ttl_seconds: i64,
    /// Remaining lifetime in hours, rounded to one decimal.
    #[serde(default)]
    pub ttl_hours: f64,
    /// Human readable remaining lifetime, e.g. `23h 12m`.
    #[serde(default)]
    pub expires_in: String,
}

/// Platform descriptor from `GET /api/platforms` and friends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Stable identifier, e.g. `spotify`.
    pub name: String,
    /// Label shown to users.
    pub display_name: String,
    /// Short glyph shown next to the label.
    #[serde(default)]
    pub icon: String,
    /// Whether playlists can be extracted from this platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_extract: Option<bool>,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorBody {
    /// Either a message string or a structured validation report.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Message carried in `detail` when it is a non-empty string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

/// A converted track. The backend owns the schema; fields are read on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct PlaylistTrack(pub Map<String, Value>);

impl PlaylistTrack {
    fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Track title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    /// Artist credit; extractors emit either `artists` or `artist`.
    #[must_use]
    pub fn artists(&self) -> Option<&str> {
        self.text("artists").or_else(|| self.text("artist"))
    }

    /// Album name when the matcher recorded one.
    #[must_use]
    pub fn album(&self) -> Option<&str> {
        self.text("album")
    }

    /// Identifier of the matched track on `platform`.
    #[must_use]
    pub fn platform_id(&self, platform: &str) -> Option<&str> {
        self.text(&format!("{platform}_id"))
    }

    /// Link to the matched track on `platform`.
    #[must_use]
    pub fn platform_url(&self, platform: &str) -> Option<&str> {
        self.text(&format!("{platform}_url"))
    }

    /// Match confidence on `platform` in the range 0.0-1.0.
    #[must_use]
    pub fn confidence(&self, platform: &str) -> Option<f64> {
        self.0
            .get(&format!("{platform}_confidence"))
            .and_then(Value::as_f64)
    }

    /// Whether the track has a match on `platform`.
    #[must_use]
    pub fn is_matched(&self, platform: &str) -> bool {
        self.platform_id(platform).is_some()
    }
}
