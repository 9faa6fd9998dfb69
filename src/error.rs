use thiserror::Error;

/// Boxed error returned by page sinks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum StarredExportError {
    #[error("GitHub API error ({status}): {message}")]
    ApiError {
        status: u16,
        message: String,
        documentation_url: Option<String>,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Output sink failed on page {page}: {source}")]
    SinkError {
        page: u32,
        #[source]
        source: BoxError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid API URL: {0}")]
    InvalidApiUrl(String),
}

pub type Result<T> = std::result::Result<T, StarredExportError>;
