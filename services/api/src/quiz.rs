use crate::infra::{parse_answer_pattern, AnswerPattern, PreviewDispatcher};
use clap::Args;
use cx_maturity::config::AppConfig;
use cx_maturity::error::AppError;
use cx_maturity::quiz::{
    evaluate, AdvanceOutcome, ContactInfo, QuizResult, QuizSession, QUESTIONS_PER_SECTION,
    SECTIONS,
};
use cx_maturity::submission::{BackgroundDispatcher, SubmissionDispatcher, SubmissionForwarder};
use cx_maturity::telemetry;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct QuizRunArgs {
    /// Respondent name
    #[arg(long)]
    pub(crate) name: String,
    /// Respondent e-mail
    #[arg(long)]
    pub(crate) email: String,
    /// WhatsApp number including area code
    #[arg(long)]
    pub(crate) whatsapp: String,
    /// Company name
    #[arg(long)]
    pub(crate) company: String,
    /// Twelve answers in question order, e.g. `ssssnnnnnnnn`
    #[arg(long, value_parser = parse_answer_pattern)]
    pub(crate) answers: AnswerPattern,
    /// Print the payload instead of sending it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

pub(crate) async fn run_quiz(args: QuizRunArgs) -> Result<(), AppError> {
    let QuizRunArgs {
        name,
        email,
        whatsapp,
        company,
        answers,
        dry_run,
    } = args;

    let contact = ContactInfo {
        name,
        email,
        whatsapp,
        company_name: company,
    };

    if dry_run {
        let mut session = QuizSession::new(Arc::new(PreviewDispatcher));
        let result = answer_all(&mut session, contact, &answers)?;
        render_result(&result);
        return Ok(());
    }

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let forwarder = SubmissionForwarder::from_config(&config.submission)?;
    println!(
        "Submitting in {} mode to {}",
        forwarder.mode().label(),
        forwarder.target()
    );
    let dispatcher = Arc::new(BackgroundDispatcher::new(forwarder));
    let mut session = QuizSession::new(dispatcher.clone());
    let result = answer_all(&mut session, contact, &answers)?;
    render_result(&result);

    dispatcher.drain().await;
    Ok(())
}

fn answer_all<D>(
    session: &mut QuizSession<D>,
    contact: ContactInfo,
    answers: &AnswerPattern,
) -> Result<QuizResult, AppError>
where
    D: SubmissionDispatcher + 'static,
{
    session.submit_intake(contact)?;

    for (section_index, section) in SECTIONS.iter().enumerate() {
        if let Some(progress) = session.progress() {
            println!(
                "\n{} ({}% completo): {}",
                progress.label(),
                progress.percent_complete,
                section.title
            );
        }
        for (question_index, question) in section.questions.iter().enumerate() {
            let value = answers.0[section_index * QUESTIONS_PER_SECTION + question_index];
            session.answer(section_index, question_index, value)?;
            println!(
                "{}. {} -> {}",
                section_index * QUESTIONS_PER_SECTION + question_index + 1,
                question,
                if value { "SIM" } else { "NÃO" }
            );
        }
        if session.advance() == AdvanceOutcome::Blocked {
            break;
        }
    }

    let result = match session.result() {
        Some(result) => result,
        None => evaluate(session.answers()),
    };
    Ok(result)
}

fn render_result(result: &QuizResult) {
    let level = result.maturity;
    println!("\nResultado: {} {}", level.badge, level.level);
    println!(
        "Pontuação: {}/{} ({})",
        result.score, result.total_questions, result.range_label
    );
    println!("{}", level.description);
    println!("Foco de Desenvolvimento: {}", level.focus);
    println!("Recomendação: {}", level.recommendation);

    println!("\nAnálise por Dimensão");
    for section in &result.section_scores {
        println!("- {}: {}/{}", section.title, section.score, section.total);
    }
}
