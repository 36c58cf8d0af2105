use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindease::config::AppConfig;
use mindease::error::AppError;
use mindease::telemetry;
use mindease::wellness::CompanionService;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppState, HttpSnapshotPublisher, InMemorySnapshotStore};
use crate::routes::with_wellness_routes;

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

    let store = Arc::new(InMemorySnapshotStore::default());
    let publisher = Arc::new(HttpSnapshotPublisher::new(config.sync.base_url.clone()));
    let companion_service = Arc::new(CompanionService::new(store, publisher));

    let app = with_wellness_routes(companion_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "wellness companion service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
