use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use visafunnel::funnel::{
    funnel_router, EligibilityEngine, EligibilityProfile, EligibilityResult, LeadIntakeService,
    LeadRepository, VerificationChannel,
};

pub(crate) fn with_funnel_routes<R, C>(service: Arc<LeadIntakeService<R, C>>) -> axum::Router
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    funnel_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/funnel/score",
            axum::routing::post(score_endpoint),
        )
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

/// Stateless ad-hoc scoring: counselors use this to preview a score or to
/// regenerate report inputs without touching stored leads.
pub(crate) async fn score_endpoint(
    Json(profile): Json<EligibilityProfile>,
) -> Json<EligibilityResult> {
    Json(EligibilityEngine::new().score(&profile))
}
