use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use cx_maturity::error::AppError;
use cx_maturity::quiz::{
    evaluate, AnswerSet, MaturityLevel, QuizError, QuizResult, Section, MATURITY_LEVELS,
    QUESTIONS_PER_SECTION, SECTIONS, TOTAL_QUESTIONS,
};
use cx_maturity::submission::{relay_router, WebhookRelay};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) questions_per_section: usize,
    pub(crate) total_questions: usize,
    pub(crate) sections: &'static [Section],
    pub(crate) maturity_levels: &'static [MaturityLevel],
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) complete: bool,
    #[serde(flatten)]
    pub(crate) result: QuizResult,
}

pub(crate) fn with_quiz_routes(relay: Arc<WebhookRelay>) -> axum::Router {
    relay_router(relay)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/quiz/catalog", get(catalog_endpoint))
        .route("/api/v1/quiz/evaluate", post(evaluate_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        questions_per_section: QUESTIONS_PER_SECTION,
        total_questions: TOTAL_QUESTIONS,
        sections: &SECTIONS,
        maturity_levels: &MATURITY_LEVELS,
    })
}

/// Scores a full or partial answer set without touching the webhook.
pub(crate) async fn evaluate_endpoint(
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let EvaluateRequest { answers } = payload;

    if let Some((index, _)) = answers.iter().find(|(index, _)| *index >= TOTAL_QUESTIONS) {
        return Err(QuizError::UnknownQuestion {
            section: index / QUESTIONS_PER_SECTION,
            question: index % QUESTIONS_PER_SECTION,
        }
        .into());
    }

    Ok(Json(EvaluateResponse {
        complete: answers.is_complete(),
        result: evaluate(&answers),
    }))
}
