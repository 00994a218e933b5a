use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read feed {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("feed is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("feed is missing required column \"{0}\"")]
    MissingColumn(String),
}
