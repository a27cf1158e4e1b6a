use crate::application::teachers::form::format_date;
use crate::domain::teachers::{SubmissionReceipt, TeacherSubmission, TeacherSubmissionHandler};
use async_trait::async_trait;

/// Default handler: writes each accepted draft to the log and keeps nothing.
/// The password never reaches the log and the photo is reduced to its name
/// and size.
#[derive(Clone, Default)]
pub struct LoggingSubmissionHandler;

impl LoggingSubmissionHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TeacherSubmissionHandler for LoggingSubmissionHandler {
    async fn handle(
        &self,
        submission: TeacherSubmission,
    ) -> Result<SubmissionReceipt, anyhow::Error> {
        let receipt = SubmissionReceipt::new();
        let draft = &submission.draft;

        tracing::info!(
            reference = %receipt.reference,
            mode = ?submission.mode,
            record_id = ?submission.record_id,
            username = %draft.username,
            email = %draft.email,
            first_name = %draft.first_name,
            last_name = %draft.last_name,
            phone = %draft.phone,
            address = %draft.address,
            blood_type = %draft.national_id,
            curp = %draft.personal_id_code,
            birthday = %format_date(draft.birthday),
            sex = %draft.sex,
            photo = %draft.photo.file_name,
            photo_bytes = draft.photo.size(),
            "teacher form submitted"
        );

        Ok(receipt)
    }
}
