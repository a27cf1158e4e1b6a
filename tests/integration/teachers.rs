use crate::common::{self, FilePart};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use faculty::domain::teachers::{FormMode, Sex};
use faculty::infrastructure::config::AppConfig;
use faculty::infrastructure::handlers::mock::MockSubmissionHandler;
use tower::ServiceExt;
use uuid::Uuid;

async fn send(
    handler: MockSubmissionHandler,
    method: &str,
    uri: &str,
    body: Vec<u8>,
) -> (StatusCode, serde_json::Value) {
    let state = common::create_test_app_state(handler);
    let app = faculty::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method(method)
                .header("content-type", common::multipart_content_type())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, common::body_json(response).await)
}

fn pointers(json: &serde_json::Value) -> Vec<String> {
    json["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["source"]["pointer"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_teacher() {
    let handler = MockSubmissionHandler::default();
    let body = common::multipart_body(&common::valid_fields(), &[common::photo_part()]);

    let (status, json) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    if status != StatusCode::CREATED {
        println!("Error response: {:#?}", json);
    }
    assert_eq!(status, StatusCode::CREATED);

    let data = &json["data"];
    assert_eq!(data["type"], "teachers");
    assert_eq!(data["attributes"]["username"], "teach1");
    assert_eq!(data["attributes"]["bloodType"], "12345678901");
    assert_eq!(data["attributes"]["curp"], "ABCD123456EFGH1234");
    assert_eq!(data["attributes"]["birthday"], "1990-05-17");
    assert_eq!(data["attributes"]["sex"], "male");
    assert_eq!(data["attributes"]["img"]["fileName"], "ana.png");
    assert_eq!(data["attributes"]["img"]["size"], 8);
    assert!(data["attributes"].get("password").is_none());
    assert_eq!(json["meta"]["reference"], data["id"]);

    let submissions = handler.submissions();
    assert_eq!(submissions.len(), 1);
    let draft = &submissions[0].draft;
    assert_eq!(submissions[0].mode, FormMode::Create);
    assert_eq!(submissions[0].record_id, None);
    assert_eq!(draft.password, "password1");
    assert_eq!(draft.first_name, "Ana");
    assert_eq!(draft.sex, Sex::Male);
    assert_eq!(draft.photo.content_type.as_deref(), Some("image/png"));
    assert_eq!(draft.photo.bytes, vec![137, 80, 78, 71, 13, 10, 26, 10]);
}

#[tokio::test]
async fn test_update_teacher() {
    let handler = MockSubmissionHandler::default();
    let id = Uuid::new_v4();
    let fields = common::with_field(common::valid_fields(), "sex", "female");
    let body = common::multipart_body(&fields, &[common::photo_part()]);

    let (status, json) = send(
        handler.clone(),
        "PUT",
        &format!("/api/v1/teachers/{}", id),
        body,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], id.to_string());

    let submissions = handler.submissions();
    assert_eq!(submissions[0].mode, FormMode::Update);
    assert_eq!(submissions[0].record_id, Some(id));
    assert_eq!(submissions[0].draft.sex, Sex::Female);
}

#[tokio::test]
async fn test_create_teacher_short_username() {
    let handler = MockSubmissionHandler::default();
    let fields = common::with_field(common::valid_fields(), "username", "abc");
    let body = common::multipart_body(&fields, &[common::photo_part()]);

    let (status, json) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(pointers(&json), vec!["/data/attributes/username"]);
    assert_eq!(
        json["errors"][0]["detail"],
        "El nombre de usuario debe contener por lo menos 5 caracteres"
    );
    assert!(handler.submissions().is_empty());
}

#[tokio::test]
async fn test_create_teacher_identifier_lengths() {
    let handler = MockSubmissionHandler::default();
    let fields = common::with_field(common::valid_fields(), "bloodType", "123456789012");
    let fields = common::with_field(fields, "curp", "ABCD");
    let body = common::multipart_body(&fields, &[common::photo_part()]);

    let (status, json) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        pointers(&json),
        vec!["/data/attributes/curp", "/data/attributes/bloodType"]
    );
    assert_eq!(json["errors"][0]["detail"], "La CURP debe contener 18 caracteres");
    assert_eq!(
        json["errors"][1]["detail"],
        "El NSS no puede contener más de 11 caracteres"
    );
}

#[tokio::test]
async fn test_create_teacher_missing_photo() {
    let handler = MockSubmissionHandler::default();
    let body = common::multipart_body(&common::valid_fields(), &[]);

    let (status, json) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(pointers(&json), vec!["/data/attributes/img"]);
    assert_eq!(json["errors"][0]["detail"], "Sube una imagen");
    assert!(handler.submissions().is_empty());
}

#[tokio::test]
async fn test_create_teacher_empty_file_input() {
    let handler = MockSubmissionHandler::default();
    let empty = FilePart {
        name: "img",
        file_name: "",
        content_type: "application/octet-stream",
        bytes: &[],
    };
    let body = common::multipart_body(&common::valid_fields(), &[empty]);

    let (status, json) = send(handler, "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(pointers(&json), vec!["/data/attributes/img"]);
}

#[tokio::test]
async fn test_create_teacher_photo_sent_as_text() {
    let handler = MockSubmissionHandler::default();
    let fields = common::with_field(common::valid_fields(), "img", "not a file");
    let body = common::multipart_body(&fields, &[]);

    let (status, json) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(pointers(&json), vec!["/data/attributes/img"]);
    assert_eq!(json["errors"][0]["detail"], "Sube una imagen");
    assert!(handler.submissions().is_empty());
}

#[tokio::test]
async fn test_create_teacher_over_upload_limit() {
    let handler = MockSubmissionHandler::default();
    let config = AppConfig {
        max_upload_bytes: 64,
        ..AppConfig::default()
    };
    let state = common::create_test_app_state_with_config(config, handler.clone());
    let app = faculty::presentation::router::app(state).unwrap();

    let big = vec![0u8; 4096];
    let photo = FilePart {
        name: "img",
        file_name: "big.png",
        content_type: "image/png",
        bytes: &big,
    };
    let body = common::multipart_body(&common::valid_fields(), &[photo]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/teachers")
                .method("POST")
                .header("content-type", common::multipart_content_type())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let json = common::body_json(response).await;
    assert_eq!(json["errors"][0]["status"], "413");
    assert!(handler.submissions().is_empty());
}

#[tokio::test]
async fn test_create_teacher_ignores_unknown_parts() {
    let handler = MockSubmissionHandler::default();
    let fields = common::with_field(common::valid_fields(), "role", "admin");
    let body = common::multipart_body(&fields, &[common::photo_part()]);

    let (status, _) = send(handler.clone(), "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(handler.submissions().len(), 1);
}

#[tokio::test]
async fn test_create_teacher_empty_form_reports_all_fields() {
    let handler = MockSubmissionHandler::default();
    let body = common::multipart_body(&[], &[]);

    let (status, json) = send(handler, "POST", "/api/v1/teachers", body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["errors"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_create_teacher_not_multipart() {
    let state = common::create_test_app_state(MockSubmissionHandler::default());
    let app = faculty::presentation::router::app(state).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/teachers")
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_teacher_handler_failure() {
    let body = common::multipart_body(&common::valid_fields(), &[common::photo_part()]);

    let (status, json) = send(
        MockSubmissionHandler::failing(),
        "POST",
        "/api/v1/teachers",
        body,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["errors"][0]["detail"], "Internal server error");
}
