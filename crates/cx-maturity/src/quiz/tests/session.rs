use std::sync::Arc;

use super::common::*;
use crate::quiz::{
    AdvanceOutcome, ContactField, IntakeError, QuizError, QuizPhase, QuizSession, SECTION_COUNT,
};

#[test]
fn new_session_starts_at_intake() {
    let session = QuizSession::new(Arc::new(RecordingDispatcher::default()));
    assert_eq!(session.phase(), QuizPhase::Intake);
    assert!(session.answers().is_empty());
    assert!(session.contact().is_empty());
    assert!(session.progress().is_none());
}

#[test]
fn intake_requires_every_contact_field() {
    let mut session = QuizSession::new(Arc::new(RecordingDispatcher::default()));
    let mut incomplete = contact();
    incomplete.email.clear();

    let err = session.submit_intake(incomplete).expect_err("blank email");
    assert_eq!(
        err,
        QuizError::Intake(IntakeError::MissingField(ContactField::Email))
    );
    assert_eq!(session.phase(), QuizPhase::Intake);

    session.submit_intake(contact()).expect("intake accepted");
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 0 });
    assert_eq!(session.contact(), &contact());
}

#[test]
fn intake_cannot_be_resubmitted_mid_quiz() {
    let (mut session, _) = started_session();
    let err = session.submit_intake(contact()).expect_err("already started");
    assert!(matches!(
        err,
        QuizError::WrongPhase {
            phase: "in_progress",
            ..
        }
    ));
}

#[test]
fn answers_rejected_before_intake() {
    let mut session = QuizSession::new(Arc::new(RecordingDispatcher::default()));
    let err = session.answer(0, 0, true).expect_err("intake first");
    assert!(matches!(
        err,
        QuizError::WrongPhase {
            phase: "intake",
            ..
        }
    ));
}

#[test]
fn answer_rejects_out_of_range_positions() {
    let (mut session, _) = started_session();
    assert_eq!(
        session.answer(SECTION_COUNT, 0, true),
        Err(QuizError::UnknownQuestion {
            section: SECTION_COUNT,
            question: 0
        })
    );
    assert!(session.answer(1, 3, true).is_err());
}

#[test]
fn answer_uses_global_index_and_overwrites() {
    let (mut session, _) = started_session();
    session.answer(2, 1, true).expect("answer");
    assert_eq!(session.answers().get(7), Some(true));

    session.answer(2, 1, false).expect("answer");
    assert_eq!(session.answers().get(7), Some(false));
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn can_advance_needs_all_three_answers() {
    for section in 0..SECTION_COUNT {
        for mask in 0u8..8 {
            let (mut session, _) = started_session();
            for question in 0..3 {
                if mask & (1 << question) != 0 {
                    session
                        .answer(section, question, question % 2 == 0)
                        .expect("answer");
                }
            }
            assert_eq!(
                session.can_advance(section),
                mask == 0b111,
                "section {section} mask {mask:03b}"
            );
        }
    }
}

#[test]
fn advance_is_blocked_until_section_complete() {
    let (mut session, dispatcher) = started_session();
    session.answer(0, 0, true).expect("answer");
    session.answer(0, 1, true).expect("answer");

    assert_eq!(session.advance(), AdvanceOutcome::Blocked);
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 0 });

    session.answer(0, 2, false).expect("answer");
    assert_eq!(session.advance(), AdvanceOutcome::NextSection(1));
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 1 });
    assert_eq!(session.current_section().map(|s| s.title), Some("OPERAÇÃO"));
    assert!(dispatcher.payloads().is_empty());
}

#[test]
fn go_back_floors_at_first_section() {
    let (mut session, _) = started_session();
    session.go_back();
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 0 });

    let pattern = [T; 12];
    answer_section(&mut session, 0, &pattern);
    session.advance();
    answer_section(&mut session, 1, &pattern);
    session.advance();
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 2 });

    session.go_back();
    session.go_back();
    session.go_back();
    assert_eq!(session.phase(), QuizPhase::InProgress { section: 0 });
    assert_eq!(session.answers().len(), 6);
}

#[test]
fn completing_last_section_submits_exactly_once() {
    let (mut session, dispatcher) = started_session();
    run_quiz(&mut session, &[T, T, T, T, F, F, F, F, F, F, F, F]);

    assert_eq!(session.phase(), QuizPhase::Results);
    assert_eq!(session.advance(), AdvanceOutcome::Blocked);
    session.go_back();
    assert_eq!(session.phase(), QuizPhase::Results);

    let payloads = dispatcher.payloads();
    assert_eq!(payloads.len(), 1);
}

#[test]
fn answers_rejected_once_results_are_shown() {
    let (mut session, dispatcher) = started_session();
    run_quiz(&mut session, &[T, T, T, T, F, F, F, F, F, F, F, F]);

    let err = session.answer(0, 0, false).expect_err("quiz finished");
    assert!(matches!(
        err,
        QuizError::WrongPhase {
            phase: "results",
            ..
        }
    ));
    assert_eq!(session.answers().get(0), Some(true));
    assert_eq!(session.score(), 4);
    assert_eq!(dispatcher.payloads().len(), 1);
}

#[test]
fn ana_scores_four_and_lands_in_estruturado() {
    let (mut session, dispatcher) = started_session();
    run_quiz(&mut session, &[T, T, T, T, F, F, F, F, F, F, F, F]);

    assert_eq!(session.score(), 4);
    assert_eq!(session.maturity_level().level, "ESTRUTURADO");

    let payload = dispatcher.payloads().pop().expect("payload dispatched");
    assert_eq!(payload.score, 4);
    assert_eq!(payload.maturity_level, "ESTRUTURADO");
    assert_eq!(payload.contact, contact());
    assert_eq!(payload.answers.len(), 12);
    assert_eq!(payload.answers.get(3), Some(true));
    assert_eq!(payload.answers.get(4), Some(false));
}

#[test]
fn all_yes_scores_twelve_and_lands_in_transformador() {
    let (mut session, dispatcher) = started_session();
    run_quiz(&mut session, &[T; 12]);

    let result = session.result().expect("results available");
    assert_eq!(result.score, 12);
    assert_eq!(result.maturity.level, "TRANSFORMADOR");
    assert_eq!(dispatcher.payloads()[0].maturity_level, "TRANSFORMADOR");
}

#[test]
fn dispatch_failure_still_reaches_results() {
    let mut session = QuizSession::new(Arc::new(FailingDispatcher));
    session.submit_intake(contact()).expect("intake accepted");
    run_quiz(&mut session, &[F; 12]);

    assert_eq!(session.phase(), QuizPhase::Results);
    assert_eq!(session.maturity_level().level, "REATIVO");
}

#[test]
fn restart_clears_state_from_any_phase() {
    let (mut session, _) = started_session();
    session.answer(0, 0, true).expect("answer");
    session.restart();
    assert_eq!(session.phase(), QuizPhase::Intake);
    assert!(session.answers().is_empty());
    assert!(session.contact().is_empty());

    let (mut finished, _) = started_session();
    run_quiz(&mut finished, &[T; 12]);
    finished.restart();
    assert_eq!(finished.phase(), QuizPhase::Intake);
    assert!(finished.answers().is_empty());
    assert!(finished.result().is_none());

    let mut fresh = QuizSession::new(Arc::new(RecordingDispatcher::default()));
    fresh.restart();
    assert_eq!(fresh.phase(), QuizPhase::Intake);
}
