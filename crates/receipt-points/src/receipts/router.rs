use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{Receipt, ReceiptId};
use super::repository::ReceiptRepository;
use super::service::{ReceiptService, ReceiptServiceError};

/// Router builder exposing receipt submission and scoring endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route(
            "/receipts/process",
            post(process_handler::<R>).fallback(only_post_allowed),
        )
        .route(
            "/receipts/:receipt_id/points",
            get(points_handler::<R>).fallback(only_get_allowed),
        )
        .route(
            "/receipts/:receipt_id/breakdown",
            get(breakdown_handler::<R>).fallback(only_get_allowed),
        )
        .with_state(service)
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let Json(receipt) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "receipt payload rejected");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Error unmarshaling JSON: {}", rejection.body_text()),
            );
        }
    };

    match service.submit(receipt) {
        Ok(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
        Err(ReceiptServiceError::Validation(report)) => {
            let payload = json!({
                "error": format!("Validation errors: {report}"),
                "violations": report,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => service_error_response(other),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.points(&ReceiptId(receipt_id)) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn breakdown_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.breakdown(&ReceiptId(receipt_id)) {
        Ok(breakdown) => {
            let payload = json!({ "breakdown": breakdown.explanations_with_total() });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

async fn only_post_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Only POST is allowed".to_string(),
    )
}

async fn only_get_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "Only GET is allowed".to_string(),
    )
}

fn service_error_response(err: ReceiptServiceError) -> Response {
    let status = match &err {
        ReceiptServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ReceiptServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ReceiptServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, err.to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
