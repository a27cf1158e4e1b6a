use crate::presentation::handlers::teachers;
use axum::{
    Router,
    routing::{post, put},
};

use crate::infrastructure::state::AppState;

/// Teacher form routes - rendering and submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(teachers::create_teacher))
        .route("/form", post(teachers::render_form))
        .route("/{id}", put(teachers::update_teacher))
}
