use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error at {path}: {message}")]
    Storage { path: String, message: String },
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Storage { path: path.display().to_string(), message: err.to_string() }
    }
}
