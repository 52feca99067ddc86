use crate::domain::payment::PaymentRequest;
use crate::error::err;
use crate::AppState;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    body: Result<Json<PaymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable payment request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(err("INVALID_REQUEST_BODY", &rejection.body_text(), None)),
            )
                .into_response();
        }
    };

    match state.payment_service.process(req).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    payment_id: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(payment_id) = match payment_id {
        Ok(id) => id,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(err("INVALID_PAYMENT_ID", &rejection.body_text(), None)),
            )
                .into_response();
        }
    };

    match state.payment_service.get(payment_id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
