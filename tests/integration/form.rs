use crate::common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use faculty::infrastructure::handlers::mock::MockSubmissionHandler;
use serde_json::json;
use tower::ServiceExt;

async fn render(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let state = common::create_test_app_state(MockSubmissionHandler::default());
    let app = faculty::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/teachers/form")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, common::body_json(response).await)
}

#[tokio::test]
async fn test_render_create_form() {
    let (status, json) = render(json!({ "type": "create" })).await;

    assert_eq!(status, StatusCode::OK);
    let form = &json["data"];
    assert_eq!(form["title"], "Agregar docente");
    assert_eq!(form["submitLabel"], "Agregar");
    assert_eq!(form["status"], "editing");
    assert_eq!(form["sections"][0]["title"], "Información de acceso");
    assert_eq!(form["sections"][1]["title"], "Información personal");

    let password = &form["sections"][0]["fields"][2];
    assert_eq!(password["name"], "password");
    assert_eq!(password["inputType"], "password");
    assert!(password.get("value").is_none());

    let img = &form["sections"][1]["fields"][8];
    assert_eq!(img["name"], "img");
    assert_eq!(img["inputType"], "file");
}

#[tokio::test]
async fn test_render_update_form_with_prefill() {
    let (status, json) = render(json!({
        "type": "update",
        "data": {
            "username": "teach1",
            "bloodType": "12345678901",
            "birthday": "1990-05-17T06:00:00Z",
            "nested": { "ignored": true }
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let form = &json["data"];
    assert_eq!(form["mode"], "update");
    assert_eq!(form["submitLabel"], "Actualizar");
    assert_eq!(form["sections"][0]["fields"][0]["value"], "teach1");
    assert_eq!(form["sections"][1]["fields"][5]["value"], "12345678901");
    assert_eq!(form["sections"][1]["fields"][6]["value"], "1990-05-17");
}

#[tokio::test]
async fn test_render_rejects_unknown_mode() {
    let (status, json) = render(json!({ "type": "delete" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json["errors"].is_array());
}
