use faculty::infrastructure::config::AppConfig;
use faculty::infrastructure::handlers::mock::MockSubmissionHandler;
use faculty::infrastructure::state::AppState;
use std::sync::Arc;

pub const BOUNDARY: &str = "----facultyTestBoundary7MA4YWxkTrZu0gW";

pub fn create_test_app_state(handler: MockSubmissionHandler) -> AppState {
    create_test_app_state_with_config(AppConfig::default(), handler)
}

pub fn create_test_app_state_with_config(
    config: AppConfig,
    handler: MockSubmissionHandler,
) -> AppState {
    AppState::new(config, Arc::new(handler))
}

/// Valid values for every text field of the teacher form, by wire name
pub fn valid_fields() -> Vec<(&'static str, String)> {
    vec![
        ("username", "teach1".to_string()),
        ("email", "a@b.com".to_string()),
        ("password", "password1".to_string()),
        ("firstName", "Ana".to_string()),
        ("lastName", "Lopez".to_string()),
        ("phone", "5551234".to_string()),
        ("address", "Main St".to_string()),
        ("bloodType", "12345678901".to_string()),
        ("curp", "ABCD123456EFGH1234".to_string()),
        ("birthday", "1990-05-17".to_string()),
        ("sex", "male".to_string()),
    ]
}

/// Replaces (or adds) one text field
pub fn with_field(
    mut fields: Vec<(&'static str, String)>,
    name: &'static str,
    value: &str,
) -> Vec<(&'static str, String)> {
    fields.retain(|(n, _)| *n != name);
    fields.push((name, value.to_string()));
    fields
}

pub struct FilePart<'a> {
    pub name: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn photo_part() -> FilePart<'static> {
    FilePart {
        name: "img",
        file_name: "ana.png",
        content_type: "image/png",
        bytes: &[137, 80, 78, 71, 13, 10, 26, 10],
    }
}

/// Encodes a `multipart/form-data` body using [`BOUNDARY`]
pub fn multipart_body(fields: &[(&str, String)], files: &[FilePart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    for file in files {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.name, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
