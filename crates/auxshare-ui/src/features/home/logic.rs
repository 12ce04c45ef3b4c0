//! Convert form helpers.

use crate::core::platforms::{builtin_targets, detect_source};
use auxshare_api_models::{DEFAULT_TARGET_PLATFORM, PlatformInfo};

/// Validate a pasted playlist link, returning it trimmed.
///
/// # Errors
/// Returns a message for blank input or input that is not a link.
pub fn validate_playlist_url(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Paste a playlist link to convert");
    }
    let lower = trimmed.to_ascii_lowercase();
    if !(lower.starts_with("https://") || lower.starts_with("http://") || lower.starts_with("spotify:"))
    {
        return Err("Playlist links start with https://");
    }
    Ok(trimmed.to_string())
}

/// Label describing the detected source platform.
#[must_use]
pub fn source_hint(url: &str) -> Option<String> {
    detect_source(url).map(|platform| {
        let mut label = format!("{} {}", platform.icon, platform.display_name);
        if platform.can_extract == Some(false) {
            label.push_str(" (not supported as a source)");
        }
        label
    })
}

/// Target options to offer; the built-in catalogue when the backend sent none.
#[must_use]
pub fn target_options(platforms: Vec<PlatformInfo>) -> Vec<PlatformInfo> {
    if platforms.is_empty() {
        builtin_targets()
    } else {
        platforms
    }
}

/// Keep `current` when it is offered, else the default target, else the first option.
#[must_use]
pub fn selected_target(options: &[PlatformInfo], current: &str) -> String {
    let offered = |name: &str| options.iter().any(|platform| platform.name == name);
    if offered(current) {
        current.to_string()
    } else if offered(DEFAULT_TARGET_PLATFORM) || options.is_empty() {
        DEFAULT_TARGET_PLATFORM.to_string()
    } else {
        options[0].name.clone()
    }
}

/// The user's target pick, kept outside render so a late platform list
/// reconciles against the latest choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetChoice {
    current: String,
}

impl Default for TargetChoice {
    fn default() -> Self {
        Self {
            current: DEFAULT_TARGET_PLATFORM.to_string(),
        }
    }
}

impl TargetChoice {
    /// Currently selected platform name.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Record a pick made in the form.
    pub fn choose(&mut self, name: impl Into<String>) {
        self.current = name.into();
    }

    /// Reconcile with the offered targets and return the resulting pick.
    pub fn apply_options(&mut self, options: &[PlatformInfo]) -> &str {
        self.current = selected_target(options, &self.current);
        &self.current
    }
}
