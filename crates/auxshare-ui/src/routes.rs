//! Routing definitions for the AuxShare UI.
use yew_router::prelude::*;

/// Pages reachable by URL.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Convert form and conversion results.
    #[at("/")]
    Home,
    /// Shared session identified by its code.
    #[at("/join/:code")]
    Join {
        /// Opaque session code.
        code: String,
    },
    /// OAuth redirect target.
    #[at("/callback")]
    Callback,
    /// Anything else.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route for a session code.
    #[must_use]
    pub fn join(code: impl Into<String>) -> Self {
        Self::Join { code: code.into() }
    }

    /// Resolve a pathname; unknown paths map to [`Route::NotFound`].
    #[must_use]
    pub fn resolve(pathname: &str) -> Self {
        Self::recognize(pathname).unwrap_or(Self::NotFound)
    }
}
