use crate::app::error::DirectoryError;
use crate::domain::model::{ImagePayload, NewSchool};
use crate::domain::validation::FieldError;
use crate::transport::http::types::{ApiResponse, CreateSchoolRequest};
use axum::http::StatusCode;
use axum::Json;

/// Builds the candidate record from a request body.
///
/// The image runs through the size gate first; a rejected payload is returned
/// separately and never attached to the candidate.
pub fn candidate_from_request(req: CreateSchoolRequest) -> (NewSchool, Option<FieldError>) {
    let (image, image_error) = match req.image.as_deref().map(str::trim) {
        None | Some("") => (None, None),
        Some(url) => match ImagePayload::from_data_url(url) {
            Ok(img) => (Some(img), None),
            Err(e) => (None, Some(e)),
        },
    };
    let school = NewSchool {
        name: req.name,
        address: req.address,
        city: req.city,
        state: req.state,
        contact: req.contact,
        email: req.email,
        image,
    };
    (school, image_error)
}

pub fn directory_error_response(err: DirectoryError) -> (StatusCode, Json<ApiResponse>) {
    match err {
        DirectoryError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse {
                success: false,
                data: Some(serde_json::json!({ "errors": errors })),
                error: Some("Validation failed".to_string()),
            }),
        ),
        DirectoryError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(err.to_string())),
        ),
        DirectoryError::SubmitFailed(_) | DirectoryError::Store(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::err(err.to_string())),
        ),
    }
}
