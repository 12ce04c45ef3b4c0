//! Session page helpers.

use crate::core::logic::{ConfidenceTier, confidence_label};
use auxshare_api_models::{PlaylistTrack, SessionTtl};

/// Display row for one track of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRow {
    /// 1-based playlist position.
    pub position: usize,
    /// Title, or a placeholder when missing.
    pub title: String,
    /// Artist credit, or a placeholder when missing.
    pub artists: String,
    /// Album when known.
    pub album: Option<String>,
    /// Track has a match on the target platform.
    pub matched: bool,
    /// Formatted match confidence.
    pub confidence: String,
    /// Confidence bucket of a matched track.
    pub tier: Option<ConfidenceTier>,
    /// Link to the matched track.
    pub link: Option<String>,
}

impl TrackRow {
    /// Build a row for `track` as matched on `platform`.
    #[must_use]
    pub fn from_track(position: usize, track: &PlaylistTrack, platform: &str) -> Self {
        let matched = track.is_matched(platform);
        let confidence = track.confidence(platform).filter(|_| matched);
        Self {
            position,
            title: track.title().unwrap_or("Unknown title").to_string(),
            artists: track.artists().unwrap_or("Unknown artist").to_string(),
            album: track.album().map(str::to_string),
            matched,
            confidence: confidence_label(confidence),
            tier: confidence.map(ConfidenceTier::from_confidence),
            link: track
                .platform_url(platform)
                .filter(|_| matched)
                .map(str::to_string),
        }
    }
}

/// Rows for every track in playlist order.
#[must_use]
pub fn track_rows(tracks: &[PlaylistTrack], platform: &str) -> Vec<TrackRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackRow::from_track(index + 1, track, platform))
        .collect()
}

/// Remaining session lifetime, e.g. `Expires in 23h 12m`.
#[must_use]
pub fn ttl_label(ttl: &SessionTtl) -> String {
    if ttl.ttl_seconds <= 0 {
        return "Expired".to_string();
    }
    let remaining = if ttl.expires_in.trim().is_empty() {
        let hours = ttl.ttl_seconds / 3600;
        let minutes = (ttl.ttl_seconds % 3600) / 60;
        format!("{hours}h {minutes}m")
    } else {
        ttl.expires_in.trim().to_string()
    };
    format!("Expires in {remaining}")
}
