use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use super::handler::AsyncSendHandler;
use crate::traversal::GraphTraversal;
use crate::types::{GremlinError, GremlinResult};

const DEFAULT_ENDPOINT: &str = "http://localhost:8182";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENDPOINT_ENV: &str = "GREMLIN_ENDPOINT";
pub const TIMEOUT_ENV: &str = "GREMLIN_TIMEOUT_SECS";

/// Configuration for the Gremlin Server HTTP transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Gremlin Server HTTP endpoint
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpTransportConfig {
    /// Read `GREMLIN_ENDPOINT` and `GREMLIN_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            config.endpoint = endpoint;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            match timeout.parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "ignoring invalid {}", TIMEOUT_ENV),
            }
        }

        config
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct GremlinRequest<'a> {
    gremlin: &'a str,
    #[serde(rename = "requestId")]
    request_id: String,
}

impl<'a> GremlinRequest<'a> {
    pub(crate) fn new(gremlin: &'a str) -> Self {
        Self {
            gremlin,
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

/// Sends rendered traversals to a Gremlin Server HTTP endpoint
///
/// Transport failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    http_client: Client,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> GremlinResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    /// Post a query string and return the decoded response body
    pub async fn submit(&self, query: &str) -> GremlinResult<Value> {
        let body = GremlinRequest::new(query);
        debug!(
            endpoint = %self.config.endpoint,
            request_id = %body.request_id,
            "submitting traversal"
        );

        let resp = self
            .http_client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp
                .text()
                .await
                .unwrap_or_else(|_| "No response body".to_string());
            warn!(%status, request_id = %body.request_id, "gremlin server rejected request");
            return Err(GremlinError::Transport(format!(
                "submit failed: HTTP {} - {}",
                status, text
            )));
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl AsyncSendHandler<GremlinResult<Value>> for HttpTransport {
    async fn send(&self, _traversal: &GraphTraversal, rendered: &str) -> GremlinResult<Value> {
        self.submit(rendered).await
    }
}
