use crate::domain::form::FieldValidationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid fields: {}", summarize(.0))]
    FieldValidation(Vec<FieldValidationError>),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("Internal server error: {0}")]
    InternalServerError(#[from] anyhow::Error),
}

fn summarize(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON:API error object
#[derive(Debug, Serialize, ToSchema)]
pub struct JsonApiError {
    pub status: String,
    pub title: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<JsonApiErrorSource>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JsonApiErrorSource {
    /// JSON pointer to the offending attribute
    pub pointer: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub errors: Vec<JsonApiError>,
}

impl JsonApiError {
    fn new(status: StatusCode, title: &str, detail: String) -> Self {
        Self {
            status: status.as_u16().to_string(),
            title: title.to_string(),
            detail,
            source: None,
        }
    }
}

impl From<&FieldValidationError> for JsonApiError {
    fn from(err: &FieldValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY.as_u16().to_string(),
            title: "Invalid Attribute".to_string(),
            detail: err.message.clone(),
            source: Some(JsonApiErrorSource {
                pointer: format!("/data/attributes/{}", err.field.name()),
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::ValidationError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                vec![JsonApiError::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation Error",
                    msg,
                )],
            ),
            AppError::FieldValidation(field_errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                field_errors.iter().map(JsonApiError::from).collect(),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                vec![JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", msg)],
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                vec![JsonApiError::new(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Payload Too Large",
                    msg,
                )],
            ),
            AppError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec![JsonApiError::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal Server Error",
                        "Internal server error".to_string(),
                    )],
                )
            }
        };

        (status, Json(ErrorResponse { errors })).into_response()
    }
}
