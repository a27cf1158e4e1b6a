use crate::application::teachers::form::TeacherFormInput;
use crate::domain::form::Field;
use crate::domain::teachers::Photo;
use crate::shared::error::AppError;
use axum::{
    Json,
    extract::{
        FromRequest, Multipart, Request,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// Teacher form values read from a `multipart/form-data` body.
/// Parts are matched by the form's wire names; anything else is ignored.
pub struct TeacherMultipart(pub TeacherFormInput);

impl<S> FromRequest<S> for TeacherMultipart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        let mut input = TeacherFormInput::default();

        while let Some(part) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let Some(field) = part.name().and_then(Field::from_name) else {
                tracing::debug!(name = ?part.name(), "ignoring unknown form part");
                continue;
            };

            if field == Field::Photo {
                let file_name = part.file_name().map(str::to_owned);
                let content_type = part.content_type().map(str::to_owned);
                let bytes = part
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                input.photo = Photo::from_upload(file_name, content_type, bytes.to_vec());
            } else {
                let text = part
                    .text()
                    .await
                    .map_err(multipart_error)?;
                input.set(field, text);
            }
        }

        Ok(TeacherMultipart(input))
    }
}

fn rejection_error(e: MultipartRejection) -> AppError {
    AppError::BadRequest(e.body_text())
}

/// Keeps the body limit distinguishable from a malformed body
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(e.body_text())
    }
}

/// JSON body whose rejection is reported as a JSON:API error
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::ValidationError(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
