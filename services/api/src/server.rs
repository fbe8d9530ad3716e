use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ddr_intake::config::AppConfig;
use ddr_intake::error::AppError;
use ddr_intake::intake::{SendGridClient, SubmissionService};
use ddr_intake::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    if config.mail.api_key.is_none() {
        warn!("SENDGRID_API_KEY is not set; submissions will fail until it is configured");
    }
    let provider = Arc::new(SendGridClient::new(&config.mail.api_base_url)?);
    let submission_service = Arc::new(SubmissionService::new(config.mail.clone(), provider));

    let app = with_intake_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "governance testing intake ready");

    axum::serve(listener, app).await?;
    Ok(())
}
