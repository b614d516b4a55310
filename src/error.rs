use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("grid dimensions must be positive, got {width} x {height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("unknown obstacle shape: {0}")]
    UnknownShape(String),

    #[error("shape size must be positive and finite, got {0}")]
    InvalidShapeSize(f32),
}

pub type Result<T> = std::result::Result<T, SolverError>;

impl From<SolverError> for JsValue {
    fn from(e: SolverError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
