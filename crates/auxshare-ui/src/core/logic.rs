//! Pure formatting and input helpers shared by views.

/// Confidence bucket used by the backend statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// At least 0.9.
    High,
    /// From 0.7 up to 0.9.
    Medium,
    /// Below 0.7.
    Low,
}

impl ConfidenceTier {
    /// Bucket a confidence in the range 0.0-1.0.
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.9 {
            Self::High
        } else if confidence >= 0.7 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// CSS tone for pills.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::High => "ok",
            Self::Medium => "warn",
            Self::Low => "error",
        }
    }
}

/// Extract a session code from user input.
///
/// Accepts a bare code or a pasted join link; whitespace is removed.
#[must_use]
pub fn normalize_session_code(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let candidate = trimmed
        .rsplit_once("/join/")
        .map_or(trimmed, |(_, code)| code);
    let candidate = candidate
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let code: String = candidate.chars().filter(|ch| !ch.is_whitespace()).collect();
    if code.is_empty() { None } else { Some(code) }
}

/// Percentage with no decimals, e.g. `80%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{percent:.0}%")
    } else {
        "0%".to_string()
    }
}

/// Confidence label for a track, en dash when unknown.
#[must_use]
pub fn confidence_label(confidence: Option<f64>) -> String {
    confidence.map_or_else(|| "–".to_string(), |value| format_percent(value * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_code_accepts_codes_and_links() {
        assert_eq!(normalize_session_code(" 4821 ").as_deref(), Some("4821"));
        assert_eq!(normalize_session_code("48 21").as_deref(), Some("4821"));
        assert_eq!(
            normalize_session_code("http://localhost:5173/join/4821/").as_deref(),
            Some("4821")
        );
        assert_eq!(
            normalize_session_code("https://aux.example/join/ab12?ref=x").as_deref(),
            Some("ab12")
        );
        assert_eq!(normalize_session_code("   "), None);
        assert_eq!(normalize_session_code("https://aux.example/join/"), None);
    }

    #[test]
    fn percent_formatting_rounds() {
        assert_eq!(format_percent(80.0), "80%");
        assert_eq!(format_percent(66.66), "67%");
        assert_eq!(format_percent(f64::NAN), "0%");
        assert_eq!(confidence_label(Some(0.934)), "93%");
        assert_eq!(confidence_label(None), "–");
    }

    #[test]
    fn confidence_tiers_match_backend_thresholds() {
        assert_eq!(ConfidenceTier::from_confidence(0.95), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.9), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.75), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::Medium.tone(), "warn");
    }
}
