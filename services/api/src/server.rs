use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cx_maturity::config::AppConfig;
use cx_maturity::error::AppError;
use cx_maturity::submission::{WebhookClient, WebhookRelay};
use cx_maturity::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let client = WebhookClient::new(config.submission.timeout)?;
    let relay = Arc::new(WebhookRelay::new(
        client,
        config.submission.webhook_url.clone(),
    ));

    let app = with_quiz_routes(relay)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        webhook_host = config.submission.webhook_url.host_str().unwrap_or("unknown"),
        "cx maturity quiz service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
