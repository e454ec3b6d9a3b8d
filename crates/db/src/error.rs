use thiserror::Error;

/// Result type for hosted-database access.
pub type DbResult<T> = Result<T, DbError>;

/// Infrastructure-level error from the hosted database's HTTP APIs.
#[derive(Debug, Error)]
pub enum DbError {
    /// Transport or decode failure (unreachable host, malformed JSON).
    #[error("data API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("data API returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The API answered 2xx but the body was not what the call expects.
    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}
