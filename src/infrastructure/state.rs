use crate::domain::teachers::TeacherSubmissionHandler;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::handlers::logging::LoggingSubmissionHandler;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub submission_handler: Arc<dyn TeacherSubmissionHandler>,
}

impl AppState {
    pub fn new(config: AppConfig, submission_handler: Arc<dyn TeacherSubmissionHandler>) -> Self {
        Self {
            config,
            submission_handler,
        }
    }

    /// State that only logs submitted drafts
    pub fn with_logging(config: AppConfig) -> Self {
        Self::new(config, Arc::new(LoggingSubmissionHandler::new()))
    }
}
