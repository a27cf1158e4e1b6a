use crate::application::teachers::form::{TeacherFormInput, TeacherRecordForm};
use crate::domain::teachers::{FormMode, SubmissionReceipt, TeacherDraft, TeacherSubmissionHandler};
use crate::shared::error::AppError;
use std::sync::Arc;
use uuid::Uuid;

pub struct SubmitTeacherUseCase {
    handler: Arc<dyn TeacherSubmissionHandler>,
}

impl SubmitTeacherUseCase {
    pub fn new(handler: Arc<dyn TeacherSubmissionHandler>) -> Self {
        Self { handler }
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn execute(
        &self,
        mode: FormMode,
        record_id: Option<Uuid>,
        input: TeacherFormInput,
    ) -> Result<(TeacherDraft, SubmissionReceipt), AppError> {
        let mut form = TeacherRecordForm::with_values(mode, input);
        form.submit(self.handler.as_ref(), record_id).await
    }
}
