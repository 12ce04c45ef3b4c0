//! OAuth redirect query parsing.

/// What the authorization provider reported on redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The user granted access.
    Authorized {
        /// Authorization code to exchange.
        code: String,
        /// Opaque state echoed by the provider.
        state: Option<String>,
    },
    /// The user or provider refused.
    Denied {
        /// Error identifier, e.g. `access_denied`.
        error: String,
        /// Optional human-readable description.
        description: Option<String>,
    },
    /// The page was opened without OAuth parameters.
    Missing,
}

fn decode(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), |decoded| decoded.into_owned())
}

fn query_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

impl CallbackOutcome {
    /// Parse a location search string such as `?code=abc&state=xyz`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut code = None;
        let mut state = None;
        let mut error = None;
        let mut description = None;
        for (key, value) in query_pairs(query) {
            let value = Some(value).filter(|value| !value.trim().is_empty());
            match key.as_str() {
                "code" => code = value,
                "state" => state = value,
                "error" => error = value,
                "error_description" => description = value,
                _ => {}
            }
        }
        match (error, code) {
            (Some(error), _) => Self::Denied { error, description },
            (None, Some(code)) => Self::Authorized { code, state },
            (None, None) => Self::Missing,
        }
    }
}
