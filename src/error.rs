// Error types for postie.
// Covers transport, response parsing, configuration and start-up failures.

use thiserror::Error;

use crate::api::EntityKind;

#[derive(Error, Debug)]
pub enum PostieError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No {kind} found with id {id}")]
    EntityNotFound { kind: EntityKind, id: i64 },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PostieError>;
