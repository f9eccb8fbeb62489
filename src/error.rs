use thiserror::Error;

/// Errors that can occur while loading flow definitions from JSON.
///
/// Malformed *fields* never produce an error; they are coerced to defaults.
/// Only input that is not JSON at all, or a file that cannot be read, fails.
#[derive(Error, Debug, Clone)]
pub enum FlowLoadError {
    #[error("Failed to parse flow JSON: {0}")]
    Json(String),

    #[error("Could not read flow file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors that can occur when converting a custom user format into a `FlowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid custom data: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for FlowLoadError {
    fn from(err: serde_json::Error) -> Self {
        FlowLoadError::Json(err.to_string())
    }
}
