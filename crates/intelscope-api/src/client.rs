//! HTTP client for the reputation backend

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use intelscope_core::{Error, Result, SearchType, GENERIC_ANALYSIS_ERROR};

use crate::wire::{
    CheckResponse, ConfigStatusResponse, DomainCheckResponse, ErrorBody, IpCheckResponse,
    StatisticsResponse,
};

/// Client for the backend REST API.
///
/// Cheap to clone; clones share the underlying connection pool, so one
/// client can serve every spawned fetch task.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Run a reputation check for `value`.
    ///
    /// Domains and hashes share `POST /api/check`; the hash travels in the
    /// `domain` field and the backend dispatches on its shape. IPs go to
    /// `POST /api/check-ip`.
    pub async fn check(&self, search_type: SearchType, value: &str) -> Result<CheckResponse> {
        match search_type {
            SearchType::Ip => {
                let body = json!({ "ip": value });
                let resp: IpCheckResponse = self.post_json("/api/check-ip", &body).await?;
                Ok(CheckResponse::Ip(resp))
            }
            SearchType::Domain | SearchType::Hash => {
                let body = json!({ "domain": value });
                let resp: DomainCheckResponse = self.post_json("/api/check", &body).await?;
                Ok(CheckResponse::Domain(resp))
            }
        }
    }

    /// Fetch the aggregate statistics payload (also the history source).
    pub async fn statistics(&self) -> Result<StatisticsResponse> {
        self.get_json("/api/statistics").await
    }

    /// Fetch per-source configuration state.
    pub async fn config_status(&self) -> Result<ConfigStatusResponse> {
        self.get_json("/api/config/status").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn post_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        Self::decode(resp).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(|_| Error::InvalidBaseUrl {
            url: format!("{}{path}", self.base),
        })
    }

    /// Decode a response body, translating backend error envelopes.
    ///
    /// Non-2xx bodies are expected to carry `{"error": "..."}`; that text
    /// is surfaced verbatim. Anything else degrades to the generic
    /// analysis-failure message.
    async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| GENERIC_ANALYSIS_ERROR.to_string());
            warn!(status = %status, %message, "backend returned error");
            return Err(Error::api(message));
        }

        serde_json::from_str(&text).map_err(Error::from)
    }
}
