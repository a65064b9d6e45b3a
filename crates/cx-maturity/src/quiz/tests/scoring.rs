use super::common::*;
use crate::quiz::{evaluate, AnswerSet, MaturityLevel, SectionProgress, TOTAL_QUESTIONS};

#[test]
fn score_counts_true_answers_for_every_k() {
    for k in 0..=TOTAL_QUESTIONS {
        let pattern: Vec<bool> = (0..TOTAL_QUESTIONS).map(|index| index < k).collect();
        let answers = AnswerSet::from_ordered(&pattern);
        assert_eq!(answers.score() as usize, k);

        let reversed: Vec<bool> = pattern.iter().rev().copied().collect();
        assert_eq!(AnswerSet::from_ordered(&reversed).score() as usize, k);
    }
}

#[test]
fn partial_answer_sets_score_what_is_recorded() {
    let mut answers = AnswerSet::new();
    answers.record(5, true);
    answers.record(6, false);
    assert_eq!(answers.score(), 1);
    assert!(!answers.is_complete());
}

#[test]
fn evaluate_builds_dimension_breakdown() {
    let answers = AnswerSet::from_ordered(&[T, T, T, T, F, F, F, F, F, F, F, F]);
    let result = evaluate(&answers);

    assert_eq!(result.score, 4);
    assert_eq!(result.total_questions, 12);
    assert_eq!(result.maturity, MaturityLevel::for_score(4));
    assert_eq!(result.range_label, "4-6 SIM");
    let per_section: Vec<(&str, u8)> = result
        .section_scores
        .iter()
        .map(|entry| (entry.title, entry.score))
        .collect();
    assert_eq!(
        per_section,
        vec![
            ("ESTRATÉGIA", 3),
            ("OPERAÇÃO", 1),
            ("TECNOLOGIA", 0),
            ("CULTURA", 0)
        ]
    );
}

#[test]
fn progress_reports_section_position() {
    let first = SectionProgress::for_section(0);
    assert_eq!(first.label(), "Seção 1 de 4");
    assert_eq!(first.percent_complete, 25);

    let last = SectionProgress::for_section(3);
    assert_eq!(last.label(), "Seção 4 de 4");
    assert_eq!(last.percent_complete, 100);
}
