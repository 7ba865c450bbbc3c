//! Error types shared by the page builders
//!
//! HTTP mapping lives in `api_server::AppError`; this module only knows
//! about the failures that can happen while loading data or rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid registry: {0}")]
    Registry(String),

    #[error("invalid setting {name}: {value:?}")]
    Setting { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DocsError>;
