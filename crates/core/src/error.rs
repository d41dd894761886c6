use serde::Serialize;

/// Body of every non-2xx response:
/// `{ "error": { "code": "…", "message": "…", "details": {} } }`
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
}

impl ErrorEnvelope {
    /// No resource at `path`.
    pub fn not_found(path: &str) -> Self {
        Self {
            error: ErrorBody {
                code: "not_found".to_string(),
                message: format!("no resource at {path}"),
                details: serde_json::Value::Object(serde_json::Map::new()),
            },
        }
    }
}
