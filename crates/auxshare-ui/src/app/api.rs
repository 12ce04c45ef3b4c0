//! Session manager context shared by every page.
//!
//! # Design
//! - One manager per app boot, so generations are counted app-wide.

use crate::core::client::PlaylistApi;
use crate::core::config::ClientConfig;
use crate::core::session::PlaylistSession;
use crate::core::store::PlaylistState;
use crate::services::api::HttpPlaylistApi;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Manager writing into the global playlist store.
pub(crate) type AppSession = PlaylistSession<Dispatch<PlaylistState>>;

#[derive(Clone)]
pub(crate) struct SessionCtx {
    pub session: Rc<AppSession>,
}

impl SessionCtx {
    pub(crate) fn new(config: ClientConfig) -> Self {
        tracing::info!(base_url = %config.base_url, "api client configured");
        let api: Rc<dyn PlaylistApi> = Rc::new(HttpPlaylistApi::new(config));
        Self {
            session: Rc::new(PlaylistSession::new(api, Dispatch::<PlaylistState>::new())),
        }
    }
}

impl PartialEq for SessionCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
    }
}
