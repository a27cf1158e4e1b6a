use crate::common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use faculty::infrastructure::handlers::mock::MockSubmissionHandler;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint() {
    let state = common::create_test_app_state(MockSubmissionHandler::default());
    let app = faculty::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let state = common::create_test_app_state(MockSubmissionHandler::default());
    let app = faculty::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert!(json["paths"]["/api/v1/teachers"].is_object());
}
