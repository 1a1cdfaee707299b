use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::constants::{ACCEPT_GEO_JSON, REQUEST_TIMEOUT, USER_AGENT};

/// Why an upstream fetch produced no data
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Source of decoded JSON documents, one GET per call
pub trait Fetch {
    fn get_json<T>(&self, url: &str) -> impl Future<Output = Result<T, FetchError>> + Send
    where
        T: DeserializeOwned + Send;
}

/// HTTP client for the National Weather Service API
#[derive(Debug, Clone)]
pub struct NwsClient {
    http: Arc<Client>,
}

impl NwsClient {
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            // Connections live only as long as the request that opened them.
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            http: Arc::new(http),
        })
    }
}

impl Fetch for NwsClient {
    async fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Send,
    {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&bytes).map_err(FetchError::Decode)
    }
}
