use serde::Serialize;
use utoipa::ToSchema;

/// JSON:API top-level document
#[derive(Serialize, ToSchema)]
pub struct JsonApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<JsonApiMeta>,
}

impl<T> JsonApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn with_meta(mut self, meta: JsonApiMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

/// JSON:API resource object
#[derive(Serialize, ToSchema)]
pub struct JsonApiResource<T> {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: T,
}

impl<T> JsonApiResource<T> {
    pub fn new(resource_type: &str, id: String, attributes: T) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            id,
            attributes,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiMeta {
    /// Reference issued by the submission handler
    pub reference: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String)]
    pub received_at: time::OffsetDateTime,
}
