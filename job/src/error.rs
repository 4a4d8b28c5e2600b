use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobError>;

/// Fatal job errors. Any of these aborts the run.
#[derive(Error, Debug)]
pub enum JobError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid task payload: {0}")]
    InputShape(String),

    #[error("delivery to {url} failed after {attempts} attempts: {source}")]
    Delivery {
        url: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A request that never produced a response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}
