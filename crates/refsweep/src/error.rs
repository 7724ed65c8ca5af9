#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("root must be an object or array, found {kind}")]
    InvalidRoot { kind: &'static str },

    #[error("value under search key {key:?} is {kind}, not a scalar")]
    NonScalarIdentifier { key: String, kind: &'static str },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Human-readable kind of a JSON value, for error messages.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
