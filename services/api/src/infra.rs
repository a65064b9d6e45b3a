use cx_maturity::quiz::TOTAL_QUESTIONS;
use cx_maturity::submission::{DispatchError, SubmissionDispatcher, SubmissionPayload};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses an answer string such as `ssssnnnnnnnn` (one `s`/`n` per question).
pub(crate) fn parse_answers(raw: &str) -> Result<Vec<bool>, String> {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_lowercase() {
            's' | 'y' | 't' | '1' => Ok(true),
            'n' | 'f' | '0' => Ok(false),
            other => Err(format!(
                "unrecognised answer '{other}' in '{raw}' (use s/n, y/n, t/f, or 1/0)"
            )),
        })
        .collect()
}

/// One answer per question, in global order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerPattern(pub(crate) Vec<bool>);

pub(crate) fn parse_answer_pattern(raw: &str) -> Result<AnswerPattern, String> {
    let answers = parse_answers(raw)?;
    if answers.len() != TOTAL_QUESTIONS {
        return Err(format!(
            "expected {TOTAL_QUESTIONS} answers, got {}",
            answers.len()
        ));
    }
    Ok(AnswerPattern(answers))
}

/// Dry-run dispatcher: prints the payload that would be posted.
pub(crate) struct PreviewDispatcher;

impl SubmissionDispatcher for PreviewDispatcher {
    fn dispatch(&self, payload: SubmissionPayload) -> Result<(), DispatchError> {
        let body = serde_json::to_string_pretty(&payload)
            .map_err(|err| DispatchError::Unavailable(err.to_string()))?;
        println!("\nPayload (not sent):\n{body}");
        Ok(())
    }
}
