use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use mindease::wellness::{wellness_router, CompanionService, SnapshotPublisher, SnapshotStore};
use serde_json::json;

use crate::infra::AppState;

pub(crate) fn with_wellness_routes<S, P>(service: Arc<CompanionService<S, P>>) -> axum::Router
where
    S: SnapshotStore + 'static,
    P: SnapshotPublisher + 'static,
{
    wellness_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_reflects_the_flag() {
        let (_, handle) = axum_prometheus::PrometheusMetricLayer::pair();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(handle),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024).await.expect("body");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload, json!({ "status": "ready" }));
    }
}
