use std::sync::{Arc, Mutex};

use crate::quiz::{ContactInfo, QuizSession, QUESTIONS_PER_SECTION, SECTION_COUNT};
use crate::submission::{DispatchError, SubmissionDispatcher, SubmissionPayload};

pub(super) const T: bool = true;
pub(super) const F: bool = false;

pub(super) fn contact() -> ContactInfo {
    ContactInfo {
        name: "Ana".to_string(),
        email: "a@b.com".to_string(),
        whatsapp: "+551199999999".to_string(),
        company_name: "Acme".to_string(),
    }
}

#[derive(Default)]
pub(super) struct RecordingDispatcher {
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingDispatcher {
    pub(super) fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads
            .lock()
            .expect("dispatcher mutex poisoned")
            .clone()
    }
}

impl SubmissionDispatcher for RecordingDispatcher {
    fn dispatch(&self, payload: SubmissionPayload) -> Result<(), DispatchError> {
        self.payloads
            .lock()
            .expect("dispatcher mutex poisoned")
            .push(payload);
        Ok(())
    }
}

pub(super) struct FailingDispatcher;

impl SubmissionDispatcher for FailingDispatcher {
    fn dispatch(&self, _payload: SubmissionPayload) -> Result<(), DispatchError> {
        Err(DispatchError::Unavailable("webhook offline".to_string()))
    }
}

pub(super) fn started_session() -> (QuizSession<RecordingDispatcher>, Arc<RecordingDispatcher>) {
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let mut session = QuizSession::new(dispatcher.clone());
    session.submit_intake(contact()).expect("intake accepted");
    (session, dispatcher)
}

/// Answers every question of `section` from `pattern` (global order).
pub(super) fn answer_section<D>(session: &mut QuizSession<D>, section: usize, pattern: &[bool])
where
    D: SubmissionDispatcher + 'static,
{
    for question in 0..QUESTIONS_PER_SECTION {
        let value = pattern[section * QUESTIONS_PER_SECTION + question];
        session
            .answer(section, question, value)
            .expect("question exists");
    }
}

pub(super) fn run_quiz<D>(session: &mut QuizSession<D>, pattern: &[bool])
where
    D: SubmissionDispatcher + 'static,
{
    for section in 0..SECTION_COUNT {
        answer_section(session, section, pattern);
        session.advance();
    }
}
