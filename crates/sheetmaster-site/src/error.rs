use thiserror::Error;

/// Errors from rendering or writing site artifacts.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize structured data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
