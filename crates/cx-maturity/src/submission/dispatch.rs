use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::forwarder::SubmissionForwarder;
use super::payload::SubmissionPayload;

/// Hook the quiz session calls once, on completion.
pub trait SubmissionDispatcher: Send + Sync {
    fn dispatch(&self, payload: SubmissionPayload) -> Result<(), DispatchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no async runtime available to send the submission")]
    NoRuntime,
    #[error("submission dispatch unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget dispatcher: each payload is posted from a spawned task.
///
/// Spawned tasks cannot be cancelled. `drain` lets short-lived processes wait
/// for in-flight deliveries before exiting.
pub struct BackgroundDispatcher {
    forwarder: Arc<SubmissionForwarder>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl BackgroundDispatcher {
    pub fn new(forwarder: SubmissionForwarder) -> Self {
        Self {
            forwarder: Arc::new(forwarder),
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.pending
            .lock()
            .map(|pending| pending.iter().filter(|task| !task.is_finished()).count())
            .unwrap_or(0)
    }

    /// Waits for every delivery spawned so far.
    pub async fn drain(&self) {
        let tasks = {
            let mut pending = self
                .pending
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::take(&mut *pending)
        };
        for task in tasks {
            if let Err(err) = task.await {
                warn!(error = %err, "submission task ended abnormally");
            }
        }
    }
}

impl SubmissionDispatcher for BackgroundDispatcher {
    fn dispatch(&self, payload: SubmissionPayload) -> Result<(), DispatchError> {
        let runtime = Handle::try_current().map_err(|_| DispatchError::NoRuntime)?;
        let mut pending = self
            .pending
            .lock()
            .map_err(|_| DispatchError::Unavailable("task list poisoned".to_string()))?;

        let forwarder = Arc::clone(&self.forwarder);
        let task = runtime.spawn(async move {
            match forwarder.submit(&payload).await {
                Ok(_) => info!(
                    score = payload.score,
                    maturity_level = %payload.maturity_level,
                    "quiz submission delivered"
                ),
                Err(err) => warn!(error = %err, "quiz submission dropped"),
            }
        });

        pending.retain(|task| !task.is_finished());
        pending.push(task);
        Ok(())
    }
}
