use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::answers::AnswerSet;
use super::catalog::{global_index, Section, SECTIONS, SECTION_COUNT};
use super::contact::{ContactInfo, IntakeError};
use super::maturity::MaturityLevel;
use super::result::{evaluate, QuizResult, SectionProgress};
use crate::submission::{SubmissionDispatcher, SubmissionPayload};

/// Where the visitor currently is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    Intake,
    InProgress { section: usize },
    Results,
}

impl QuizPhase {
    pub fn label(&self) -> &'static str {
        match self {
            QuizPhase::Intake => "intake",
            QuizPhase::InProgress { .. } => "in_progress",
            QuizPhase::Results => "results",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Current section is incomplete, or the quiz is not in progress.
    Blocked,
    NextSection(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("section {section} has no question {question}")]
    UnknownQuestion { section: usize, question: usize },
}

/// One visitor's pass through intake, the question sections, and results.
///
/// The session is in-memory only. Completing the last section hands a single
/// payload to the dispatcher and moves to `Results` whatever the dispatcher
/// reports.
pub struct QuizSession<D> {
    phase: QuizPhase,
    contact: ContactInfo,
    answers: AnswerSet,
    dispatcher: Arc<D>,
}

impl<D> QuizSession<D>
where
    D: SubmissionDispatcher + 'static,
{
    pub fn new(dispatcher: Arc<D>) -> Self {
        Self {
            phase: QuizPhase::Intake,
            contact: ContactInfo::default(),
            answers: AnswerSet::new(),
            dispatcher,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn submit_intake(&mut self, contact: ContactInfo) -> Result<(), QuizError> {
        if self.phase != QuizPhase::Intake {
            return Err(self.wrong_phase("submit intake"));
        }
        contact.validate()?;

        self.contact = contact;
        self.phase = QuizPhase::InProgress { section: 0 };
        debug!("intake accepted, starting first section");
        Ok(())
    }

    pub fn answer(
        &mut self,
        section: usize,
        question: usize,
        value: bool,
    ) -> Result<(), QuizError> {
        if !matches!(self.phase, QuizPhase::InProgress { .. }) {
            return Err(self.wrong_phase("answer questions"));
        }
        let index = global_index(section, question)
            .ok_or(QuizError::UnknownQuestion { section, question })?;
        self.answers.record(index, value);
        Ok(())
    }

    pub fn can_advance(&self, section: usize) -> bool {
        self.answers.is_section_complete(section)
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        let QuizPhase::InProgress { section } = self.phase else {
            return AdvanceOutcome::Blocked;
        };
        if !self.can_advance(section) {
            return AdvanceOutcome::Blocked;
        }

        if section + 1 < SECTION_COUNT {
            self.phase = QuizPhase::InProgress {
                section: section + 1,
            };
            return AdvanceOutcome::NextSection(section + 1);
        }

        self.phase = QuizPhase::Results;
        self.submit_results();
        AdvanceOutcome::Completed
    }

    pub fn go_back(&mut self) {
        if let QuizPhase::InProgress { section } = self.phase {
            self.phase = QuizPhase::InProgress {
                section: section.saturating_sub(1),
            };
        }
    }

    pub fn score(&self) -> u8 {
        self.answers.score()
    }

    pub fn maturity_level(&self) -> &'static MaturityLevel {
        MaturityLevel::for_score(self.score())
    }

    pub fn restart(&mut self) {
        self.answers.clear();
        self.contact = ContactInfo::default();
        self.phase = QuizPhase::Intake;
    }

    pub fn current_section(&self) -> Option<&'static Section> {
        match self.phase {
            QuizPhase::InProgress { section } => SECTIONS.get(section),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<SectionProgress> {
        match self.phase {
            QuizPhase::InProgress { section } => Some(SectionProgress::for_section(section)),
            _ => None,
        }
    }

    /// Results view, available once the last section has been completed.
    pub fn result(&self) -> Option<QuizResult> {
        match self.phase {
            QuizPhase::Results => Some(evaluate(&self.answers)),
            _ => None,
        }
    }

    fn submit_results(&self) {
        let payload = SubmissionPayload::build(&self.contact, &self.answers, Utc::now());
        info!(
            score = payload.score,
            maturity_level = %payload.maturity_level,
            "quiz completed"
        );
        if let Err(err) = self.dispatcher.dispatch(payload) {
            warn!(error = %err, "quiz submission could not be dispatched");
        }
    }

    fn wrong_phase(&self, action: &'static str) -> QuizError {
        QuizError::WrongPhase {
            action,
            phase: self.phase.label(),
        }
    }
}
