//! Mail relay client
//!
//! Posts form submissions as JSON to the configured relay endpoint. The
//! endpoint is a no-CORS style web app: the response body carries nothing
//! we can rely on, so success means only that the transport round-trip
//! completed.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::debug;

use super::model::InquiryPayload;

const TIMEOUT_SECS: u64 = 10;

/// Outcome of a submission, as seen by the update layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(String),
}

/// Thin client over the mail relay endpoint
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Submit a payload. The response body is ignored; a transport error is
    /// the only observable failure.
    pub async fn submit(&self, payload: &InquiryPayload) -> Result<()> {
        debug!("Submitting {} form to relay", payload.subject);
        self.http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;
        Ok(())
    }

    /// Submit and fold the result into a renderable outcome. This is the
    /// seam the update layer uses, so tests can produce outcomes directly.
    pub async fn submit_outcome(&self, payload: InquiryPayload) -> SubmitOutcome {
        match self.submit(&payload).await {
            Ok(()) => SubmitOutcome::Delivered,
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }
}
