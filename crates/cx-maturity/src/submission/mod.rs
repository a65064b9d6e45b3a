//! Delivery of completed quiz payloads to the spreadsheet webhook.

pub mod dispatch;
pub mod forwarder;
pub mod payload;
pub mod relay;

pub use dispatch::{BackgroundDispatcher, DispatchError, SubmissionDispatcher};
pub use forwarder::{ForwardError, SubmissionForwarder, WebhookClient};
pub use payload::SubmissionPayload;
pub use relay::{relay_router, RelayOutcome, WebhookRelay, RELAY_PATH};
