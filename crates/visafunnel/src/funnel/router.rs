use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::{LeadId, LeadSubmission};
use super::repository::{LeadRepository, RepositoryError, VerificationChannel};
use super::service::{FunnelServiceError, LeadIntakeService};

/// Router builder exposing the funnel's HTTP endpoints.
pub fn funnel_router<R, C>(service: Arc<LeadIntakeService<R, C>>) -> Router
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    Router::new()
        .route("/api/v1/funnel/leads", post(submit_handler::<R, C>))
        .route(
            "/api/v1/funnel/leads/:lead_id",
            get(status_handler::<R, C>),
        )
        .route(
            "/api/v1/funnel/leads/:lead_id/verify",
            post(verify_handler::<R, C>),
        )
        .route(
            "/api/v1/funnel/leads/:lead_id/report",
            get(report_handler::<R, C>),
        )
        .route(
            "/api/v1/funnel/admin/leads",
            get(review_queue_handler::<R, C>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerifyRequest {
    pub(crate) code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewQueueQuery {
    #[serde(default = "default_queue_limit")]
    pub(crate) limit: usize,
}

fn default_queue_limit() -> usize {
    50
}

fn error_payload(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

fn service_error_response(error: FunnelServiceError) -> Response {
    match error {
        FunnelServiceError::Intake(violation) => {
            error_payload(StatusCode::UNPROCESSABLE_ENTITY, violation.to_string())
        }
        FunnelServiceError::Repository(RepositoryError::Conflict) => {
            error_payload(StatusCode::CONFLICT, "lead already exists".to_string())
        }
        FunnelServiceError::Repository(RepositoryError::NotFound) => {
            error_payload(StatusCode::NOT_FOUND, "lead not found".to_string())
        }
        FunnelServiceError::VerificationRejected => error_payload(
            StatusCode::UNPROCESSABLE_ENTITY,
            "verification code rejected".to_string(),
        ),
        FunnelServiceError::NotScored => {
            error_payload(StatusCode::NOT_FOUND, error.to_string())
        }
        other => error_payload(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<LeadIntakeService<R, C>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.status_view())).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn status_handler<R, C>(
    State(service): State<Arc<LeadIntakeService<R, C>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    match service.get(&LeadId(lead_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn verify_handler<R, C>(
    State(service): State<Arc<LeadIntakeService<R, C>>>,
    Path(lead_id): Path<String>,
    axum::Json(request): axum::Json<VerifyRequest>,
) -> Response
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    match service.verify(&LeadId(lead_id), &request.code) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn report_handler<R, C>(
    State(service): State<Arc<LeadIntakeService<R, C>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    let generated_on = Local::now().date_naive();
    match service.report(&LeadId(lead_id), generated_on) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn review_queue_handler<R, C>(
    State(service): State<Arc<LeadIntakeService<R, C>>>,
    Query(query): Query<ReviewQueueQuery>,
) -> Response
where
    R: LeadRepository + 'static,
    C: VerificationChannel + 'static,
{
    match service.review_queue(query.limit) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(LeadRecordView::from).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

/// Admin listing row: status view plus contact columns for the review table.
#[derive(Debug, serde::Serialize)]
struct LeadRecordView {
    lead_id: String,
    full_name: String,
    email: String,
    status: &'static str,
    score: Option<u8>,
    is_eligible: Option<bool>,
}

impl From<&super::repository::LeadRecord> for LeadRecordView {
    fn from(record: &super::repository::LeadRecord) -> Self {
        Self {
            lead_id: record.lead_id.0.clone(),
            full_name: record.contact.full_name.clone(),
            email: record.contact.email.clone(),
            status: record.status.label(),
            score: record.evaluation.as_ref().map(|result| result.score),
            is_eligible: record.evaluation.as_ref().map(|result| result.is_eligible),
        }
    }
}
