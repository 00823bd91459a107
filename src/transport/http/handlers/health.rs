use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (store readable)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (store unreadable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let gateway = state.directory.lock().await.gateway().clone();

    match gateway.count().await {
        Ok(n) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "status": "ok", "schools": n }))),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "status": "unhealthy" })),
                error: Some(format!("Store read failed: {}", e)),
            }),
        )
            .into_response(),
    }
}
