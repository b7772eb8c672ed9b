use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_chance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use unichance::chances::ChanceEngine;
use unichance::config::AppConfig;
use unichance::error::AppError;

/// Expects telemetry to be initialised by the caller.
pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(load_catalog(config.scoring.catalog_path.as_deref())?);
    let engine = Arc::new(ChanceEngine::new(config.scoring.scoring_config()));

    let app = with_chance_routes(engine.clone(), catalog.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        universities = catalog.len(),
        pro_budget_mode = ?engine.config().pro_budget_mode,
        "admission chance service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
