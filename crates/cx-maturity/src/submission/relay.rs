use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{json, Value};
use tracing::{error, info};

use super::forwarder::{ForwardError, WebhookClient};

pub const RELAY_PATH: &str = "/api/relay";

/// Server-side hop that re-issues browser submissions to the webhook.
#[derive(Debug, Clone)]
pub struct WebhookRelay {
    client: WebhookClient,
    webhook_url: Url,
}

/// What the relay reports back to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// Upstream accepted; its JSON is passed through unchanged.
    Delivered(Value),
    /// Upstream answered with a non-success status.
    Rejected { status: StatusCode, body: String },
    /// Local failure: transport, unreadable upstream JSON, or a bad request body.
    Failed(String),
}

impl WebhookRelay {
    pub fn new(client: WebhookClient, webhook_url: Url) -> Self {
        Self {
            client,
            webhook_url,
        }
    }

    pub async fn forward(&self, body: &Value) -> RelayOutcome {
        let response = match self.client.post_json(&self.webhook_url, body).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "relay could not reach webhook");
                return RelayOutcome::Failed(transport_detail(&err));
            }
        };

        if !response.status.is_success() {
            error!(
                status = %response.status,
                body = %response.body,
                "webhook rejected relayed payload"
            );
            return RelayOutcome::Rejected {
                status: response.status,
                body: response.body,
            };
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(result) => {
                info!(?result, "webhook acknowledged relayed payload");
                RelayOutcome::Delivered(result)
            }
            Err(err) => {
                error!(error = %err, "webhook acknowledgment was not JSON");
                RelayOutcome::Failed(err.to_string())
            }
        }
    }
}

fn transport_detail(err: &ForwardError) -> String {
    match err {
        ForwardError::Transport(source) => source.to_string(),
        other => other.to_string(),
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        match self {
            RelayOutcome::Delivered(result) => (StatusCode::OK, Json(result)).into_response(),
            RelayOutcome::Rejected { status, body } => {
                let payload = json!({
                    "message": "Failed to send data to webhook",
                    "error": body,
                });
                (status, Json(payload)).into_response()
            }
            RelayOutcome::Failed(detail) => {
                let payload = json!({
                    "message": "Internal Server Error",
                    "error": detail,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
            }
        }
    }
}

/// Router exposing the relay endpoint.
pub fn relay_router(relay: Arc<WebhookRelay>) -> Router {
    Router::new()
        .route(RELAY_PATH, post(relay_handler))
        .with_state(relay)
}

pub(crate) async fn relay_handler(
    State(relay): State<Arc<WebhookRelay>>,
    body: Bytes,
) -> Response {
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => payload,
        Err(err) => {
            error!(error = %err, "relay received malformed JSON");
            return RelayOutcome::Failed(err.to_string()).into_response();
        }
    };

    info!(bytes = body.len(), "relaying submission to webhook");
    relay.forward(&payload).await.into_response()
}
