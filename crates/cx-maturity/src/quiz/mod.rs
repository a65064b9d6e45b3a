//! Intake, sectioned yes/no questionnaire, and maturity scoring.

pub mod answers;
pub mod catalog;
pub mod contact;
pub mod maturity;
pub mod result;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use catalog::{
    global_index, Section, SectionIcon, QUESTIONS_PER_SECTION, SECTIONS, SECTION_COUNT,
    TOTAL_QUESTIONS,
};
pub use contact::{ContactField, ContactInfo, IntakeError};
pub use maturity::{MaturityLevel, MATURITY_LEVELS};
pub use result::{evaluate, QuizResult, SectionProgress, SectionScore};
pub use session::{AdvanceOutcome, QuizError, QuizPhase, QuizSession};
