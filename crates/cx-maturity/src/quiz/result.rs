use serde::Serialize;

use super::answers::AnswerSet;
use super::catalog::{SectionIcon, QUESTIONS_PER_SECTION, SECTIONS, TOTAL_QUESTIONS};
use super::maturity::MaturityLevel;

/// Score for a single dimension on the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub title: &'static str,
    pub icon: SectionIcon,
    pub score: u8,
    pub total: u8,
}

/// Everything the results view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: u8,
    pub total_questions: u8,
    pub maturity: &'static MaturityLevel,
    pub range_label: String,
    pub section_scores: Vec<SectionScore>,
}

pub fn evaluate(answers: &AnswerSet) -> QuizResult {
    let score = answers.score();
    let maturity = MaturityLevel::for_score(score);
    let section_scores = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, section)| SectionScore {
            title: section.title,
            icon: section.icon,
            score: answers.section_score(index),
            total: QUESTIONS_PER_SECTION as u8,
        })
        .collect();

    QuizResult {
        score,
        total_questions: TOTAL_QUESTIONS as u8,
        maturity,
        range_label: maturity.range_label(),
        section_scores,
    }
}

/// Progress indicator for the section currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section_number: usize,
    pub section_count: usize,
    pub percent_complete: u8,
}

impl SectionProgress {
    pub fn for_section(section_index: usize) -> Self {
        let section_count = SECTIONS.len();
        let section_number = (section_index + 1).min(section_count);
        Self {
            section_number,
            section_count,
            percent_complete: (section_number * 100 / section_count) as u8,
        }
    }

    pub fn label(&self) -> String {
        format!("Seção {} de {}", self.section_number, self.section_count)
    }
}
