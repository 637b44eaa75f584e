use wasm_bindgen::JsValue;

/// Drop-response moves that break the endpoint contract. The path builder
/// still accepts such sequences; this only feeds diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MovesError {
    #[error("expected {expected} moves, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("move {index} has value {value}, expected 0 or 1")]
    Value { index: usize, value: String },
}

/// Reasons a drop request ends without an animation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DropError {
    /// Error text reported by the endpoint itself (e.g. insufficient balance).
    #[error("{0}")]
    Rejected(String),
    #[error("invalid bet: {0:?}")]
    InvalidBet(String),
    #[error("drop request failed: {0}")]
    Transport(String),
    #[error("malformed drop response: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("animation speed must be in (0, 1], got {0}")]
    Speed(f64),
}

impl From<DropError> for JsValue {
    fn from(err: DropError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a `JsValue` thrown by a browser API.
pub(crate) fn js_err(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
