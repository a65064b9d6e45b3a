use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::payload::SubmissionPayload;
use crate::config::{DeliveryMode, SubmissionConfig};

/// Failure delivering a payload to the webhook or relay.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

/// Raw upstream answer: status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin JSON-over-POST client shared by the forwarder and the relay.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ForwardError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    pub async fn post_json<T>(&self, url: &Url, body: &T) -> Result<WebhookResponse, ForwardError>
    where
        T: Serialize + ?Sized,
    {
        let response = self.http.post(url.clone()).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(WebhookResponse { status, body })
    }
}

/// Sends completed payloads to the webhook, or to the relay in proxied mode.
#[derive(Debug, Clone)]
pub struct SubmissionForwarder {
    client: WebhookClient,
    target: Url,
    mode: DeliveryMode,
}

impl SubmissionForwarder {
    pub fn new(client: WebhookClient, target: Url, mode: DeliveryMode) -> Self {
        Self {
            client,
            target,
            mode,
        }
    }

    pub fn from_config(config: &SubmissionConfig) -> Result<Self, ForwardError> {
        let client = WebhookClient::new(config.timeout)?;
        Ok(Self::new(client, config.target_url().clone(), config.mode))
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    /// One POST, no retry. Returns the acknowledgment body, as JSON when it parses.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<Value, ForwardError> {
        let response = match self.client.post_json(&self.target, payload).await {
            Ok(response) => response,
            Err(err) => {
                error!(
                    mode = self.mode.label(),
                    error = %err,
                    "failed to reach submission endpoint"
                );
                return Err(err);
            }
        };

        if !response.status.is_success() {
            error!(
                mode = self.mode.label(),
                status = %response.status,
                body = %response.body,
                "submission endpoint rejected payload"
            );
            return Err(ForwardError::Upstream {
                status: response.status,
                body: response.body,
            });
        }

        let acknowledgement = match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => value,
            Err(_) => Value::String(response.body),
        };
        debug!(mode = self.mode.label(), ?acknowledgement, "submission acknowledged");
        Ok(acknowledgement)
    }
}
