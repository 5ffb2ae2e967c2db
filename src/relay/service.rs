//! The submit operation: validate, log, forward, report.

use serde::Serialize;
use serde_json::Value;

use crate::config::WebhookConfig;
use crate::lead::Lead;
use crate::observability::metrics;
use crate::relay::error::SubmitError;
use crate::webhook::{WebhookClient, WebhookError};

/// Successful submission, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub status: &'static str,
    pub message: &'static str,
    /// Exactly the payload that was forwarded.
    pub data: Lead,
}

/// Validates lead records and forwards them to the webhook.
#[derive(Debug, Clone)]
pub struct LeadRelay {
    webhook: WebhookClient,
}

impl LeadRelay {
    pub fn new(webhook: WebhookClient) -> Self {
        Self { webhook }
    }

    /// Build a relay for the configured webhook.
    pub fn from_config(config: &WebhookConfig) -> Result<Self, WebhookError> {
        Ok(Self::new(WebhookClient::new(config)?))
    }

    pub fn webhook(&self) -> &WebhookClient {
        &self.webhook
    }

    /// Validate `record` and forward it as a lead.
    ///
    /// No outbound call is made unless validation succeeds. Every failure is
    /// logged here before it is returned.
    pub async fn submit(&self, record: &Value) -> Result<Submission, SubmitError> {
        let result = self.try_submit(record).await;
        match &result {
            Ok(_) => metrics::record_submission("success"),
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!(kind = e.kind(), error = %e, "Lead rejected");
                } else {
                    tracing::error!(kind = e.kind(), error = %e, "Lead forwarding failed");
                }
                metrics::record_submission(e.kind());
            }
        }
        result
    }

    async fn try_submit(&self, record: &Value) -> Result<Submission, SubmitError> {
        let lead = Lead::from_record(record)?;
        lead.ensure_required()?;

        let serialized = serde_json::to_string(&lead).unwrap_or_default();
        tracing::info!(lead = %serialized, "Processing lead");

        self.webhook.forward(&lead).await.map_err(|e| match e {
            WebhookError::Rejected { status, body } => SubmitError::Upstream {
                status: status.as_u16(),
                body,
            },
            other => SubmitError::Internal(other.to_string()),
        })?;

        Ok(Submission {
            status: "success",
            message: "Lead submitted successfully",
            data: lead,
        })
    }
}
