use crate::domain::teachers::{SubmissionReceipt, TeacherSubmission, TeacherSubmissionHandler};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Keeps submissions in memory
#[derive(Clone, Default)]
pub struct MockSubmissionHandler {
    submissions: Arc<Mutex<Vec<TeacherSubmission>>>,
    receipts: Arc<Mutex<Vec<SubmissionReceipt>>>,
    fail: bool,
}

impl MockSubmissionHandler {
    /// A handler that rejects every submission
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<TeacherSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn receipts(&self) -> Vec<SubmissionReceipt> {
        self.receipts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TeacherSubmissionHandler for MockSubmissionHandler {
    async fn handle(
        &self,
        submission: TeacherSubmission,
    ) -> Result<SubmissionReceipt, anyhow::Error> {
        if self.fail {
            return Err(anyhow::anyhow!("Submission handler unavailable"));
        }

        let receipt = SubmissionReceipt::new();
        self.submissions.lock().unwrap().push(submission);
        self.receipts.lock().unwrap().push(receipt.clone());
        Ok(receipt)
    }
}
