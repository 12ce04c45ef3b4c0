//! Playlist session store slice.
//!
//! # Design
//! - Holds at most one conversion or session result at a time.
//! - Transitions are plain methods so they can be tested outside wasm; the
//!   session manager decides when to apply them.
//! - Derived values (`has_results`, `match_rate`) are computed, not stored.

use auxshare_api_models::{ConvertResponse, MatchStats, PlaylistTrack, SessionResponse};
use yewdux::store::Store;

/// Message stored when a conversion fails without a backend detail.
pub const CONVERT_FAILED: &str = "Failed to convert playlist";

/// Message stored when a session load fails without a backend detail.
pub const SESSION_NOT_FOUND: &str = "Session not found or expired";

/// Latest conversion/session result plus request status.
#[derive(Clone, Debug, PartialEq, Default, Store)]
pub struct PlaylistState {
    /// Tracks of the loaded session; conversions leave this empty.
    pub tracks: Vec<PlaylistTrack>,
    /// A request is in flight.
    pub loading: bool,
    /// Message for the last failure.
    pub error: Option<String>,
    /// Code of the current session.
    pub session_code: Option<String>,
    /// Shareable join URL returned by a conversion.
    pub share_url: Option<String>,
    /// Match statistics of the current result.
    pub stats: Option<MatchStats>,
    /// Platform the playlist came from.
    pub source_platform: Option<String>,
    /// Platform the tracks were matched against.
    pub target_platform: Option<String>,
}

impl PlaylistState {
    /// Whether any tracks are loaded.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Match rate as a percentage, 0 when no stats are held.
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        self.stats.map_or(0.0, |stats| stats.match_rate * 100.0)
    }

    /// Restore the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_result(&mut self) {
        self.tracks.clear();
        self.session_code = None;
        self.share_url = None;
        self.stats = None;
        self.source_platform = None;
        self.target_platform = None;
    }

    pub(crate) fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
        self.clear_result();
    }

    pub(crate) fn apply_conversion(&mut self, response: &ConvertResponse) {
        self.session_code = Some(response.code.clone());
        self.share_url = Some(response.share_url.clone());
        self.stats = Some(response.stats);
        self.source_platform = Some(response.source_platform.clone());
        self.target_platform = Some(response.target_platform.clone());
    }

    pub(crate) fn apply_session(&mut self, code: &str, response: &SessionResponse) {
        self.tracks.clone_from(&response.tracks);
        self.stats = Some(response.stats);
        self.session_code = Some(code.to_string());
        self.target_platform = Some(response.target_platform.clone());
        self.source_platform.clone_from(&response.source_platform);
    }

    pub(crate) fn apply_failure(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) const fn finish_request(&mut self) {
        self.loading = false;
    }
}
