use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Upper bound for a whole multipart submission, photo included
    pub max_upload_bytes: usize,
    /// Comma separated list, empty or `*` allows any origin
    pub cors_allowed_origins: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            cors_allowed_origins: String::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .unwrap_or(DEFAULT_PORT);

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

        Self {
            port,
            max_upload_bytes,
            cors_allowed_origins,
        }
    }
}
