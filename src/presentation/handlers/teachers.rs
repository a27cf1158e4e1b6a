use crate::application::teachers::form::{FormView, TeacherFormInput};
use crate::application::teachers::render::{RenderTeacherFormRequest, RenderTeacherFormUseCase};
use crate::application::teachers::submit::SubmitTeacherUseCase;
use crate::domain::teachers::FormMode;
use crate::infrastructure::state::AppState;
use crate::presentation::dtos::TeacherResource;
use crate::presentation::extractors::{JsonBody, TeacherMultipart};
use crate::shared::error::{AppError, ErrorResponse};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Render the teacher form, optionally pre-filled
#[utoipa::path(
    post,
    path = "/api/v1/teachers/form",
    request_body = RenderTeacherFormRequest,
    responses(
        (status = 200, description = "Form rendered", body = JsonApiResponse<FormView>),
        (status = 422, description = "Malformed request", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn render_form(
    JsonBody(req): JsonBody<RenderTeacherFormRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = RenderTeacherFormUseCase.execute(req);

    Ok((StatusCode::OK, Json(JsonApiResponse::new(view))))
}

/// Submit a new teacher
#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    request_body(content = TeacherFormInput, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Teacher accepted", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 413, description = "Upload over the configured limit", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn create_teacher(
    State(state): State<AppState>,
    TeacherMultipart(input): TeacherMultipart,
) -> Result<impl IntoResponse, AppError> {
    submit(state, FormMode::Create, None, input, StatusCode::CREATED).await
}

/// Submit changes to an existing teacher
#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID")
    ),
    request_body(content = TeacherFormInput, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Teacher update accepted", body = JsonApiResponse<JsonApiResource<TeacherResource>>),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 413, description = "Upload over the configured limit", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    TeacherMultipart(input): TeacherMultipart,
) -> Result<impl IntoResponse, AppError> {
    submit(state, FormMode::Update, Some(id), input, StatusCode::OK).await
}

async fn submit(
    state: AppState,
    mode: FormMode,
    record_id: Option<Uuid>,
    input: TeacherFormInput,
    status: StatusCode,
) -> Result<impl IntoResponse, AppError> {
    let use_case = SubmitTeacherUseCase::new(state.submission_handler);

    let (draft, receipt) = use_case.execute(mode, record_id, input).await?;
    let id = record_id.unwrap_or(receipt.reference).to_string();
    let resource = JsonApiResource::new("teachers", id, TeacherResource::from(draft));
    let meta = JsonApiMeta {
        reference: receipt.reference.to_string(),
        received_at: receipt.received_at,
    };

    Ok((status, Json(JsonApiResponse::new(resource).with_meta(meta))))
}
