//! Streaming platform catalogue and source URL detection.
//!
//! # Design
//! - Detection mirrors the backend URL patterns and is only a hint; the
//!   backend stays the authority on what it can convert.
//! - The built-in catalogue backs the target picker when the platform
//!   endpoint is unreachable.

use auxshare_api_models::PlatformInfo;
use once_cell::sync::Lazy;
use regex::Regex;

struct PlatformPattern {
    name: &'static str,
    display_name: &'static str,
    icon: &'static str,
    can_extract: bool,
    patterns: &'static [&'static str],
}

const CATALOGUE: [PlatformPattern; 3] = [
    PlatformPattern {
        name: "spotify",
        display_name: "Spotify",
        icon: "🟢",
        can_extract: true,
        patterns: &[
            r"open\.spotify\.com/(playlist|album|track)",
            r"spotify:(playlist|album|track):",
        ],
    },
    PlatformPattern {
        name: "youtube_music",
        display_name: "YouTube Music",
        icon: "🔴",
        can_extract: true,
        patterns: &[r"music\.youtube\.com/(playlist|watch)"],
    },
    PlatformPattern {
        name: "apple_music",
        display_name: "Apple Music",
        icon: "🎵",
        can_extract: false,
        patterns: &[r"music\.apple\.com/.+/(playlist|album|song)"],
    },
];

static MATCHERS: Lazy<Vec<(usize, Regex)>> = Lazy::new(|| {
    CATALOGUE
        .iter()
        .enumerate()
        .flat_map(|(index, platform)| {
            platform
                .patterns
                .iter()
                .filter_map(move |pattern| Regex::new(pattern).ok().map(|re| (index, re)))
        })
        .collect()
});

fn info(platform: &PlatformPattern) -> PlatformInfo {
    PlatformInfo {
        name: platform.name.to_string(),
        display_name: platform.display_name.to_string(),
        icon: platform.icon.to_string(),
        can_extract: Some(platform.can_extract),
    }
}

/// Platform a playlist URL belongs to, if recognised.
#[must_use]
pub fn detect_source(url: &str) -> Option<PlatformInfo> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    MATCHERS
        .iter()
        .find(|(_, re)| re.is_match(url))
        .map(|(index, _)| info(&CATALOGUE[*index]))
}

/// Built-in list of conversion targets.
#[must_use]
pub fn builtin_targets() -> Vec<PlatformInfo> {
    CATALOGUE.iter().map(info).collect()
}

/// Display name for a platform identifier, falling back to the identifier.
#[must_use]
pub fn display_name(name: &str) -> String {
    CATALOGUE
        .iter()
        .find(|platform| platform.name == name || platform.display_name == name)
        .map_or_else(|| name.to_string(), |platform| platform.display_name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_known_sources() {
        let cases = [
            ("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M", "spotify"),
            ("spotify:album:4aawyAB9vmqN3uQ7FjRGTy", "spotify"),
            ("https://music.youtube.com/playlist?list=PL123", "youtube_music"),
            (
                "https://music.apple.com/us/playlist/todays-hits/pl.f4d106fed2bd41149aaacabb233eb5eb",
                "apple_music",
            ),
        ];
        for (url, expected) in cases {
            let detected = detect_source(url).map(|platform| platform.name);
            assert_eq!(detected.as_deref(), Some(expected), "{url}");
        }
    }

    #[test]
    fn unknown_and_blank_urls_are_not_detected() {
        assert!(detect_source("").is_none());
        assert!(detect_source("https://www.youtube.com/watch?v=abc").is_none());
        assert!(detect_source("https://open.spotify.com/artist/xyz").is_none());
    }

    #[test]
    fn apple_music_is_target_only() {
        let apple = detect_source("https://music.apple.com/us/album/x/1").unwrap();
        assert_eq!(apple.can_extract, Some(false));
        assert_eq!(builtin_targets().len(), 3);
    }

    #[test]
    fn display_name_falls_back_to_identifier() {
        assert_eq!(display_name("youtube_music"), "YouTube Music");
        assert_eq!(display_name("Spotify"), "Spotify");
        assert_eq!(display_name("tidal"), "tidal");
    }
}
