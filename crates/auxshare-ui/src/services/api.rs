//! HTTP client helpers (REST).
//!
//! # Design
//! - Every call goes through `execute`, which is the one place failures are
//!   logged. Errors are returned unchanged; there is no retry.
//! - The timeout aborts the fetch through an `AbortController` and covers
//!   the whole call, body included.

use crate::core::client::{Endpoint, Method, PlaylistApi, log_failure};
use crate::core::config::ClientConfig;
use crate::core::error::ApiError;
use async_trait::async_trait;
use auxshare_api_models::{
    ConvertRequest, ConvertResponse, ExtractRequest, PlatformInfo, SessionResponse, SessionTtl,
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::AbortController;

#[derive(Clone, Debug)]
pub(crate) struct HttpPlaylistApi {
    config: ClientConfig,
}

impl HttpPlaylistApi {
    pub(crate) const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        self.execute(endpoint, None::<&()>).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: &B,
    ) -> Result<T, ApiError> {
        self.execute(endpoint, Some(body)).await
    }

    async fn execute<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let result = self.send(&endpoint, body).await;
        if let Err(err) = &result {
            log_failure(&endpoint, err);
        }
        result
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(&endpoint.path());
        let controller = AbortController::new()
            .map_err(|err| ApiError::request(format!("abort controller unavailable: {err:?}")))?;
        let signal = controller.signal();

        let mut req = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        req = req
            .header("Content-Type", "application/json")
            .abort_signal(Some(&signal));
        if let Some(body) = body {
            req = req
                .json(body)
                .map_err(|err| ApiError::request(format!("encode body: {err}")))?;
        }

        // The deadline spans the body read as well as the headers.
        let timeout_ms = u32::try_from(self.config.timeout.as_millis()).unwrap_or(u32::MAX);
        let timer = Timeout::new(timeout_ms, move || controller.abort());
        let result = Self::round_trip(req).await;
        drop(timer);

        let expired = signal.aborted().then_some(self.config.timeout);
        result.map_err(|err| err.unless_timed_out(expired))
    }

    async fn round_trip<T: DeserializeOwned>(req: Request) -> Result<T, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|err| ApiError::network(format!("read error body: {err}")))?;
            return Err(ApiError::from_response(status, &text));
        }
        resp.json::<T>()
            .await
            .map_err(|err| ApiError::request(format!("decode response: {err}")))
    }
}

#[async_trait(?Send)]
impl PlaylistApi for HttpPlaylistApi {
    async fn extract_playlist(&self, url: &str) -> Result<Value, ApiError> {
        let body = ExtractRequest {
            url: url.to_string(),
        };
        self.post_json(Endpoint::ExtractPlaylist, &body).await
    }

    async fn convert_playlist(
        &self,
        url: &str,
        target_platform: &str,
    ) -> Result<ConvertResponse, ApiError> {
        let body = ConvertRequest::new(url, target_platform);
        self.post_json(Endpoint::Convert, &body).await
    }

    async fn get_session(&self, code: &str) -> Result<SessionResponse, ApiError> {
        self.get_json(Endpoint::Session(code)).await
    }

    async fn get_session_ttl(&self, code: &str) -> Result<SessionTtl, ApiError> {
        self.get_json(Endpoint::SessionTtl(code)).await
    }

    async fn get_supported_platforms(&self) -> Result<Vec<PlatformInfo>, ApiError> {
        self.get_json(Endpoint::Platforms).await
    }

    async fn get_supported_sources(&self) -> Result<Vec<PlatformInfo>, ApiError> {
        self.get_json(Endpoint::PlatformSources).await
    }

    async fn get_supported_targets(&self) -> Result<Vec<PlatformInfo>, ApiError> {
        self.get_json(Endpoint::PlatformTargets).await
    }

    async fn health_check(&self) -> Result<Value, ApiError> {
        self.get_json(Endpoint::Health).await
    }
}
