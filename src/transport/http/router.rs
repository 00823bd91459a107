use crate::domain::filter::FilterState;
use crate::domain::model::{FilterField, SchoolField, SchoolRecord};
use crate::domain::validation::{ErrorKind, FieldError};
use crate::transport::http::handlers::{health, schools};
use crate::transport::http::types::{ApiResponse, CreateSchoolRequest};
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Must stay above the base64 size of a `MAX_IMAGE_BYTES` image plus the
/// text fields; oversize images are reported by the size gate, not by axum.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        schools::create_school_handler,
        schools::list_schools_handler,
        schools::get_school_handler,
        schools::suggestions_handler
    ),
    components(schemas(
        ApiResponse,
        CreateSchoolRequest,
        SchoolRecord,
        SchoolField,
        FilterField,
        FilterState,
        FieldError,
        ErrorKind
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/schools",
            get(schools::list_schools_handler).post(schools::create_school_handler),
        )
        .route("/api/schools/suggestions", get(schools::suggestions_handler))
        .route("/api/schools/:id", get(schools::get_school_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
