//! HTTP client for forwarding leads to the downstream webhook.
//!
//! One POST per lead, bounded by the configured timeout. The underlying
//! `reqwest::Client` pools connections; a connection is handed back to the
//! pool when the response (or error) is dropped, on every exit path.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::config::WebhookConfig;
use crate::lead::Lead;
use crate::observability::metrics;

/// Errors that can occur while forwarding a lead.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The webhook answered with a non-success status.
    #[error("webhook responded with {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    /// Connection, timeout or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The client could not be built from configuration.
    #[error("invalid webhook configuration: {0}")]
    Configuration(String),
}

impl WebhookError {
    /// Whether the failure was the bounded wait expiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WebhookError::Transport(e) if e.is_timeout())
    }
}

/// Client bound to a single, statically configured webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: Url,
    timeout: Duration,
}

impl WebhookClient {
    /// Build a client for the configured webhook.
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let url = Url::parse(&config.url).map_err(|e| {
            WebhookError::Configuration(format!("invalid URL '{}': {}", config.url, e))
        })?;
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|e| {
                WebhookError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST the lead as JSON and wait for a success status.
    ///
    /// Returns the upstream response body on success.
    pub async fn forward(&self, lead: &Lead) -> Result<String, WebhookError> {
        let start = Instant::now();
        let result = self.send(lead).await;
        metrics::record_webhook_call(start, result.is_ok());

        match &result {
            Ok(_) => tracing::debug!(
                url = %self.url,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Webhook accepted lead"
            ),
            Err(e) => tracing::debug!(
                url = %self.url,
                timeout = e.is_timeout(),
                error = %e,
                "Webhook call failed"
            ),
        }
        result
    }

    async fn send(&self, lead: &Lead) -> Result<String, WebhookError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(lead)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The status alone decides the outcome; an unreadable body stays a rejection.
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(status = %status, error = %e, "Failed to read webhook error body");
                    String::new()
                }
            };
            return Err(WebhookError::Rejected { status, body });
        }

        Ok(response.text().await?)
    }
}
