//! Playlist session manager: the only writer of [`PlaylistState`].
//!
//! # Design
//! - Request start is applied when the operation is called, before the
//!   returned future is first polled, so `loading` is visible immediately.
//! - Each call takes a new generation. Completions from superseded
//!   generations are returned to their caller but never touch state, which
//!   also covers requests still in flight when `reset` runs.
//! - Failures are recorded as a user message and then handed back unchanged.

use crate::core::client::PlaylistApi;
use crate::core::error::ApiError;
use crate::core::store::{CONVERT_FAILED, PlaylistState, SESSION_NOT_FOUND};
use auxshare_api_models::{ConvertResponse, SessionResponse};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Access to the reactive state container.
pub trait StateHandle: Clone + 'static {
    /// Apply a mutation and notify observers.
    fn update(&self, mutate: impl FnOnce(&mut PlaylistState));

    /// Current state.
    fn snapshot(&self) -> Rc<PlaylistState>;
}

impl StateHandle for Rc<RefCell<PlaylistState>> {
    fn update(&self, mutate: impl FnOnce(&mut PlaylistState)) {
        mutate(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> Rc<PlaylistState> {
        Rc::new(self.borrow().clone())
    }
}

#[cfg(target_arch = "wasm32")]
impl StateHandle for yewdux::prelude::Dispatch<PlaylistState> {
    fn update(&self, mutate: impl FnOnce(&mut PlaylistState)) {
        self.reduce_mut(mutate);
    }

    fn snapshot(&self) -> Rc<PlaylistState> {
        self.get()
    }
}

/// Runs playlist operations against the backend and records their outcome.
#[derive(Clone)]
pub struct PlaylistSession<H> {
    api: Rc<dyn PlaylistApi>,
    state: H,
    generation: Rc<Cell<u64>>,
}

impl<H: StateHandle> PlaylistSession<H> {
    /// Create a manager writing into `state`.
    #[must_use]
    pub fn new(api: Rc<dyn PlaylistApi>, state: H) -> Self {
        Self {
            api,
            state,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Backend client shared with views for one-off reads.
    #[must_use]
    pub fn api(&self) -> Rc<dyn PlaylistApi> {
        Rc::clone(&self.api)
    }

    /// State container written by this manager.
    #[must_use]
    pub const fn state(&self) -> &H {
        &self.state
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    /// Convert a playlist and record the resulting session identifiers.
    ///
    /// # Errors
    /// Returns the backend failure unchanged after storing its message.
    pub fn convert_playlist(
        &self,
        url: &str,
        target_platform: &str,
    ) -> impl Future<Output = Result<ConvertResponse, ApiError>> + use<H> {
        let generation = self.next_generation();
        self.state.update(PlaylistState::begin_request);
        let session = self.clone();
        let url = url.to_string();
        let target_platform = target_platform.to_string();
        async move {
            let result = session.api.convert_playlist(&url, &target_platform).await;
            if !session.is_current(generation) {
                tracing::debug!(generation, "discarding superseded conversion result");
                return result;
            }
            match &result {
                Ok(response) => {
                    tracing::info!(
                        code = %response.code,
                        source = %response.source_platform,
                        target = %response.target_platform,
                        match_rate = response.stats.match_rate,
                        "conversion successful"
                    );
                    session.state.update(|state| {
                        state.apply_conversion(response);
                        state.finish_request();
                    });
                }
                Err(err) => {
                    tracing::warn!(error = %err, "conversion failed");
                    let message = err.user_message(CONVERT_FAILED);
                    session.state.update(|state| {
                        state.apply_failure(message);
                        state.finish_request();
                    });
                }
            }
            result
        }
    }

    /// Load a stored session and its tracks.
    ///
    /// # Errors
    /// Returns the backend failure unchanged after storing its message.
    pub fn load_session(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<SessionResponse, ApiError>> + use<H> {
        let generation = self.next_generation();
        self.state.update(PlaylistState::begin_request);
        let session = self.clone();
        let code = code.to_string();
        async move {
            let result = session.api.get_session(&code).await;
            if !session.is_current(generation) {
                tracing::debug!(generation, code = %code, "discarding superseded session result");
                return result;
            }
            match &result {
                Ok(response) => {
                    tracing::info!(
                        code = %code,
                        tracks = response.tracks.len(),
                        target = %response.target_platform,
                        source = response.source_platform.as_deref().unwrap_or("unknown"),
                        "session loaded"
                    );
                    session.state.update(|state| {
                        state.apply_session(&code, response);
                        state.finish_request();
                    });
                }
                Err(err) => {
                    tracing::warn!(code = %code, error = %err, "session load failed");
                    let message = err.user_message(SESSION_NOT_FOUND);
                    session.state.update(|state| {
                        state.apply_failure(message);
                        state.finish_request();
                    });
                }
            }
            result
        }
    }

    /// Clear every field and orphan requests still in flight.
    pub fn reset(&self) {
        self.next_generation();
        self.state.update(PlaylistState::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use auxshare_api_models::{PlatformInfo, SessionTtl};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use tokio::sync::oneshot;

    type Reply<T> = oneshot::Receiver<Result<T, ApiError>>;

    #[derive(Default)]
    struct ScriptedApi {
        converts: RefCell<HashMap<String, Reply<ConvertResponse>>>,
        sessions: RefCell<HashMap<String, Reply<SessionResponse>>>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedApi {
        fn expect_convert(&self, url: &str) -> oneshot::Sender<Result<ConvertResponse, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.converts.borrow_mut().insert(url.to_string(), rx);
            tx
        }

        fn expect_session(&self, code: &str) -> oneshot::Sender<Result<SessionResponse, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.sessions.borrow_mut().insert(code.to_string(), rx);
            tx
        }
    }

    async fn wait<T>(reply: Option<Reply<T>>) -> Result<T, ApiError> {
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::network("reply dropped"))),
            None => Err(ApiError::request("unscripted call")),
        }
    }

    #[async_trait(?Send)]
    impl PlaylistApi for ScriptedApi {
        async fn extract_playlist(&self, _url: &str) -> Result<Value, ApiError> {
            Err(ApiError::request("unscripted call"))
        }

        async fn convert_playlist(
            &self,
            url: &str,
            target_platform: &str,
        ) -> Result<ConvertResponse, ApiError> {
            self.calls
                .borrow_mut()
                .push(format!("convert {url} {target_platform}"));
            let reply = self.converts.borrow_mut().remove(url);
            wait(reply).await
        }

        async fn get_session(&self, code: &str) -> Result<SessionResponse, ApiError> {
            self.calls.borrow_mut().push(format!("session {code}"));
            let reply = self.sessions.borrow_mut().remove(code);
            wait(reply).await
        }

        async fn get_session_ttl(&self, _code: &str) -> Result<SessionTtl, ApiError> {
            Err(ApiError::request("unscripted call"))
        }

        async fn get_supported_platforms(&self) -> Result<Vec<PlatformInfo>, ApiError> {
            Err(ApiError::request("unscripted call"))
        }

        async fn get_supported_sources(&self) -> Result<Vec<PlatformInfo>, ApiError> {
            Err(ApiError::request("unscripted call"))
        }

        async fn get_supported_targets(&self) -> Result<Vec<PlatformInfo>, ApiError> {
            Err(ApiError::request("unscripted call"))
        }

        async fn health_check(&self) -> Result<Value, ApiError> {
            Err(ApiError::request("unscripted call"))
        }
    }

    fn harness() -> (Rc<ScriptedApi>, PlaylistSession<Rc<RefCell<PlaylistState>>>) {
        let api = Rc::new(ScriptedApi::default());
        let dyn_api: Rc<dyn PlaylistApi> = api.clone();
        let session = PlaylistSession::new(dyn_api, Rc::new(RefCell::new(PlaylistState::default())));
        (api, session)
    }

    fn conversion(code: &str) -> ConvertResponse {
        serde_json::from_value(json!({
            "code": code,
            "share_url": format!("https://x/join/{code}"),
            "stats": {"match_rate": 0.8},
            "source_platform": "spotify",
            "target_platform": "youtube_music"
        }))
        .unwrap()
    }

    fn stored_session(titles: &[&str]) -> SessionResponse {
        let tracks: Vec<Value> = titles
            .iter()
            .map(|title| json!({"title": title, "artists": "Band", "youtube_music_id": "yt"}))
            .collect();
        serde_json::from_value(json!({
            "tracks": tracks,
            "stats": {"total": titles.len(), "matched": titles.len(), "match_rate": 1.0},
            "target_platform": "youtube_music",
            "source_platform": "Spotify"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn convert_sets_loading_before_first_poll() {
        let (api, session) = harness();
        let reply = api.expect_convert("https://open.spotify.com/playlist/x");
        let pending = session.convert_playlist("https://open.spotify.com/playlist/x", "youtube_music");
        assert!(session.state().snapshot().loading);

        reply.send(Ok(conversion("ABC123"))).unwrap();
        let response = pending.await.unwrap();
        assert_eq!(response.code, "ABC123");
        assert!(!session.state().snapshot().loading);
        assert_eq!(
            api.calls.borrow().as_slice(),
            ["convert https://open.spotify.com/playlist/x youtube_music"]
        );
    }

    #[tokio::test]
    async fn convert_success_populates_result() {
        let (api, session) = harness();
        api.expect_convert("url").send(Ok(conversion("ABC123"))).unwrap();
        session.convert_playlist("url", "youtube_music").await.unwrap();

        let state = session.state().snapshot();
        assert_eq!(state.session_code.as_deref(), Some("ABC123"));
        assert_eq!(state.share_url.as_deref(), Some("https://x/join/ABC123"));
        assert_eq!(state.source_platform.as_deref(), Some("spotify"));
        assert_eq!(state.target_platform.as_deref(), Some("youtube_music"));
        assert!((state.match_rate() - 80.0).abs() < 1e-9);
        assert!(!state.has_results());
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn convert_failure_records_detail_or_fallback() {
        let (api, session) = harness();
        api.expect_convert("https://x")
            .send(Err(ApiError::from_response(
                400,
                r#"{"detail":"Unsupported platform URL: https://x"}"#,
            )))
            .unwrap();
        let err = session.convert_playlist("https://x", "youtube_music").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        let state = session.state().snapshot();
        assert_eq!(state.error.as_deref(), Some("Unsupported platform URL: https://x"));
        assert!(!state.loading);

        api.expect_convert("https://x")
            .send(Err(ApiError::network("timeout")))
            .unwrap();
        let err = session.convert_playlist("https://x", "youtube_music").await.unwrap_err();
        assert_eq!(err, ApiError::network("timeout"));
        assert_eq!(
            session.state().snapshot().error.as_deref(),
            Some(CONVERT_FAILED)
        );
    }

    #[tokio::test]
    async fn load_session_populates_tracks() {
        let (api, session) = harness();
        api.expect_session("4821")
            .send(Ok(stored_session(&["One", "Two"])))
            .unwrap();
        let response = session.load_session("4821").await.unwrap();
        assert_eq!(response.tracks.len(), 2);

        let state = session.state().snapshot();
        assert!(state.has_results());
        assert_eq!(state.session_code.as_deref(), Some("4821"));
        assert_eq!(state.source_platform.as_deref(), Some("Spotify"));
        assert_eq!(state.target_platform.as_deref(), Some("youtube_music"));
        assert!((state.match_rate() - 100.0).abs() < 1e-9);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn load_session_clears_previous_conversion_on_start() {
        let (api, session) = harness();
        api.expect_convert("url").send(Ok(conversion("ABC123"))).unwrap();
        session.convert_playlist("url", "youtube_music").await.unwrap();

        let reply = api.expect_session("4821");
        let pending = session.load_session("4821");
        let state = session.state().snapshot();
        assert!(state.loading);
        assert_eq!(state.session_code, None);
        assert_eq!(state.share_url, None);
        assert_eq!(state.stats, None);
        assert_eq!(state.source_platform, None);
        assert_eq!(state.target_platform, None);

        drop(reply);
        assert!(pending.await.is_err());
        let state = session.state().snapshot();
        assert_eq!(state.share_url, None);
        assert_eq!(state.error.as_deref(), Some(SESSION_NOT_FOUND));
    }

    #[tokio::test]
    async fn load_session_not_found_keeps_tracks_empty() {
        let (api, session) = harness();
        api.expect_session("1111")
            .send(Ok(stored_session(&["Old"])))
            .unwrap();
        session.load_session("1111").await.unwrap();

        api.expect_session("2222")
            .send(Err(ApiError::from_response(404, r#"{"detail":"Session expired"}"#)))
            .unwrap();
        session.load_session("2222").await.unwrap_err();

        let state = session.state().snapshot();
        assert_eq!(state.error.as_deref(), Some("Session expired"));
        assert!(state.tracks.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn load_session_without_detail_uses_fallback() {
        let (api, session) = harness();
        api.expect_session("9999")
            .send(Err(ApiError::from_response(500, "")))
            .unwrap();
        session.load_session("9999").await.unwrap_err();
        assert_eq!(
            session.state().snapshot().error.as_deref(),
            Some(SESSION_NOT_FOUND)
        );
    }

    #[tokio::test]
    async fn superseded_completion_is_discarded() {
        let (api, session) = harness();
        let first_reply = api.expect_convert("first");
        let second_reply = api.expect_convert("second");
        let first = session.convert_playlist("first", "youtube_music");
        let second = session.convert_playlist("second", "youtube_music");

        let (first_result, second_result, ()) = tokio::join!(first, second, async move {
            second_reply.send(Ok(conversion("NEW"))).unwrap();
            tokio::task::yield_now().await;
            first_reply.send(Ok(conversion("OLD"))).unwrap();
        });

        assert_eq!(first_result.unwrap().code, "OLD");
        assert_eq!(second_result.unwrap().code, "NEW");
        let state = session.state().snapshot();
        assert_eq!(state.session_code.as_deref(), Some("NEW"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn stale_failure_does_not_clear_newer_loading() {
        let (api, session) = harness();
        let first_reply = api.expect_session("old");
        let second_reply = api.expect_session("new");
        let first = session.load_session("old");
        let second = session.load_session("new");

        let (first_result, ()) = tokio::join!(first, async move {
            first_reply
                .send(Err(ApiError::from_response(404, r#"{"detail":"gone"}"#)))
                .unwrap();
        });
        assert!(first_result.is_err());
        let state = session.state().snapshot();
        assert!(state.loading);
        assert_eq!(state.error, None);

        second_reply.send(Ok(stored_session(&["Fresh"]))).unwrap();
        second.await.unwrap();
        let state = session.state().snapshot();
        assert_eq!(state.session_code.as_deref(), Some("new"));
        assert_eq!(state.tracks.len(), 1);
    }

    #[tokio::test]
    async fn reset_orphans_in_flight_requests() {
        let (api, session) = harness();
        let reply = api.expect_convert("url");
        let pending = session.convert_playlist("url", "youtube_music");
        session.reset();
        assert_eq!(*session.state().snapshot(), PlaylistState::default());

        reply.send(Ok(conversion("LATE"))).unwrap();
        pending.await.unwrap();
        assert_eq!(*session.state().snapshot(), PlaylistState::default());
    }

    #[tokio::test]
    async fn reset_after_mixed_calls_restores_initial_state() {
        let (api, session) = harness();
        api.expect_convert("url").send(Ok(conversion("A"))).unwrap();
        session.convert_playlist("url", "youtube_music").await.unwrap();
        api.expect_session("B")
            .send(Err(ApiError::network("down")))
            .unwrap();
        session.load_session("B").await.unwrap_err();

        session.reset();
        assert_eq!(*session.state().snapshot(), PlaylistState::default());
        session.reset();
        assert_eq!(*session.state().snapshot(), PlaylistState::default());
    }
}
