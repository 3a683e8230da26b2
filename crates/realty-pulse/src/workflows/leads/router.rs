use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::QualificationAnswers;
use super::intake::LeadSubmission;
use super::notifier::LeadNotifier;
use super::service::{LeadIntakeService, LeadServiceError};

/// Router builder exposing the lead-capture and scoring endpoints.
pub fn lead_router<N>(service: Arc<LeadIntakeService<N>>) -> Router
where
    N: LeadNotifier + 'static,
{
    Router::new()
        .route("/api/v1/leads", post(submit_handler::<N>))
        .route("/api/v1/leads/score", post(score_handler::<N>))
        .with_state(service)
}

pub(crate) async fn score_handler<N>(
    State(service): State<Arc<LeadIntakeService<N>>>,
    axum::Json(answers): axum::Json<QualificationAnswers>,
) -> Response
where
    N: LeadNotifier + 'static,
{
    let result = service.score(&answers);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn submit_handler<N>(
    State(service): State<Arc<LeadIntakeService<N>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    N: LeadNotifier + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(LeadServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
