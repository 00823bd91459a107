use crate::app::error::DirectoryError;
use crate::domain::filter::FilterState;
use crate::domain::model::SchoolField;
use crate::domain::validation::{validate_school, FieldError, ValidationErrors};
use crate::transport::http::handlers::common::{candidate_from_request, directory_error_response};
use crate::transport::http::types::{
    json_422, ApiResponse, AppState, CreateSchoolRequest, SuggestionQuery,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

#[utoipa::path(
    post,
    path = "/api/schools",
    request_body = CreateSchoolRequest,
    responses(
        (status = 201, description = "School stored", body = ApiResponse),
        (status = 400, description = "Validation failed; `data.errors` maps field to message", body = ApiResponse),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ApiResponse),
        (status = 500, description = "Store rejected the write; safe to retry", body = ApiResponse)
    )
)]
pub async fn create_school_handler(
    State(state): State<AppState>,
    request: Result<Json<CreateSchoolRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        // Body over the router limit: only an oversize image gets there.
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(error = %e, "request body over limit, treating as oversize image");
            let mut errors = ValidationErrors::new();
            errors.insert(SchoolField::Image, FieldError::too_large_unmeasured());
            return directory_error_response(DirectoryError::Validation(errors)).into_response();
        }
        Err(e) => {
            return json_422(
                e,
                "{\"name\",\"address\",\"city\",\"state\",\"contact\",\"email\",\"image\"}",
            )
            .into_response()
        }
    };

    let (candidate, image_error) = candidate_from_request(request);
    if let Some(image_error) = image_error {
        warn!(error = %image_error, "image rejected before attach");
        let mut errors = validate_school(&candidate);
        errors.insert(SchoolField::Image, image_error);
        return directory_error_response(DirectoryError::Validation(errors)).into_response();
    }

    let mut directory = state.directory.lock().await;
    match directory.add_school(candidate).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(serde_json::json!({ "school": record }))),
        )
            .into_response(),
        Err(e) => directory_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/schools",
    params(FilterState),
    responses(
        (status = 200, description = "Schools matching every non-empty filter, in insertion order", body = ApiResponse),
        (status = 500, description = "Store read failed", body = ApiResponse)
    )
)]
pub async fn list_schools_handler(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> impl IntoResponse {
    let directory = state.directory.lock().await;
    match directory.search(&filter).await {
        Ok(schools) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "count": schools.len(),
                "schools": schools,
            }))),
        )
            .into_response(),
        Err(e) => directory_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(
        ("id" = u64, Path, description = "School id")
    ),
    responses(
        (status = 200, description = "School found", body = ApiResponse),
        (status = 404, description = "No school with that id", body = ApiResponse)
    )
)]
pub async fn get_school_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    let directory = state.directory.lock().await;
    match directory.get_school(id).await {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({ "school": record }))),
        )
            .into_response(),
        Err(e) => directory_error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/schools/suggestions",
    params(SuggestionQuery),
    responses(
        (status = 200, description = "Up to 5 distinct values starting with `q`", body = ApiResponse)
    )
)]
pub async fn suggestions_handler(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> impl IntoResponse {
    let mut directory = state.directory.lock().await;
    match directory.suggest(query.field, &query.q).await {
        Ok(values) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "field": query.field,
                "suggestions": values,
            }))),
        )
            .into_response(),
        Err(e) => directory_error_response(e).into_response(),
    }
}
