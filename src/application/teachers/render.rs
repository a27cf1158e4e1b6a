use crate::application::teachers::form::{FormView, TeacherRecordForm};
use crate::domain::teachers::FormMode;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RenderTeacherFormRequest {
    #[serde(rename = "type", default)]
    pub mode: FormMode,
    /// Existing record used to pre-fill the inputs. Any shape is accepted.
    #[schema(value_type = Object)]
    pub data: Option<Value>,
}

pub struct RenderTeacherFormUseCase;

impl RenderTeacherFormUseCase {
    pub fn execute(&self, req: RenderTeacherFormRequest) -> FormView {
        TeacherRecordForm::new(req.mode, req.data.as_ref()).render()
    }
}
