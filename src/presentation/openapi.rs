use crate::application::teachers::form::{
    FieldView, FormStatus, FormView, InputType, SectionView, SelectOption, TeacherFormInput,
};
use crate::application::teachers::render::RenderTeacherFormRequest;
use crate::domain::form::FieldValidationError;
use crate::domain::teachers::{FormMode, Sex};
use crate::presentation::dtos::{PhotoResource, TeacherResource};
use crate::shared::error::{ErrorResponse, JsonApiError, JsonApiErrorSource};
use crate::shared::response::{JsonApiMeta, JsonApiResource, JsonApiResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Faculty Teacher Form API",
        version = "0.1.0",
        description = "Teacher record form: rendering, validation and submission.\n\nResponses follow the JSON:API v1.1 document structure."
    ),
    paths(
        crate::presentation::handlers::teachers::render_form,
        crate::presentation::handlers::teachers::create_teacher,
        crate::presentation::handlers::teachers::update_teacher,
    ),
    components(
        schemas(
            // Request DTOs
            TeacherFormInput,
            RenderTeacherFormRequest,
            FormMode,
            Sex,

            // Rendered form
            FormView,
            FormStatus,
            SectionView,
            FieldView,
            InputType,
            SelectOption,

            // JSON:API Resource types
            TeacherResource,
            PhotoResource,
            JsonApiResource<TeacherResource>,
            JsonApiResponse<JsonApiResource<TeacherResource>>,
            JsonApiResponse<FormView>,
            JsonApiMeta,

            // JSON:API Error types
            ErrorResponse,
            JsonApiError,
            JsonApiErrorSource,
            FieldValidationError,
        )
    ),
    tags(
        (name = "teachers", description = "Teacher record form endpoints")
    )
)]
pub struct ApiDoc;
