//! Error types for the model compiler

use thiserror::Error;

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;

/// Model compiler errors
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("\"{key}\" cannot be processed (unsupported schema kind: {kind})")]
    UnsupportedNodeKind { key: String, kind: &'static str },

    #[error("Enum type already registered with different members: {name}")]
    DuplicateEnumRegistration { name: String },

    #[error("Model type already registered: {name}")]
    DuplicateModel { name: String },

    #[error("Expected an object schema, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompileError {
    /// The schema field key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            CompileError::UnsupportedNodeKind { key, .. } => Some(key),
            _ => None,
        }
    }
}
