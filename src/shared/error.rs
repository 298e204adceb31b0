//! Error handling for the converter
//!
//! All errors are serializable so the page can render the specific kind.

use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Category tag not recognized
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unit name absent from the resolved category's table
    #[error("Invalid unit '{unit}' for category {category}")]
    InvalidUnit { category: String, unit: String },

    /// Settings file unparseable or settings values out of range
    #[error("Settings Error: {0}")]
    Settings(String),

    #[error("I/O Error: {0}")]
    Io(String),
}

impl AppError {
    pub fn invalid_unit(category: impl ToString, unit: impl Into<String>) -> Self {
        AppError::InvalidUnit {
            category: category.to_string(),
            unit: unit.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Settings(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
