use crate::app::directory_service::DirectoryService;
use crate::domain::model::FilterField;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Mutex<DirectoryService>>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Body of `POST /api/schools`. Missing text fields are treated as empty and
/// reported by validation rather than rejected as malformed JSON.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateSchoolRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    /// Ten decimal digits.
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    /// `data:image/<type>;base64,<payload>`, at most 5,000,000 decoded bytes.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionQuery {
    /// One of `name`, `city`, `state`.
    pub field: FilterField,
    /// Current draft text; matched as a case-insensitive prefix.
    #[serde(default)]
    pub q: String,
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::err(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
