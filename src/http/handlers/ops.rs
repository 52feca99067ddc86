use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let stored_payments = state.payment_service.payments_repo.len().await;

    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "ready": true,
            "bank_adapter": state.payment_service.bank.name(),
            "stored_payments": stored_payments
        })),
    )
        .into_response()
}

pub async fn liveness() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(serde_json::json!({"alive": true}))).into_response()
}
