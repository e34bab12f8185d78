use thiserror::Error;

/// Failure modes of a single vault API call. None of these are retried;
/// every variant is terminal for the operation that produced it.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("response buffer allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API request failed: {}", .message.as_deref().unwrap_or("no error detail"))]
    Rejected { message: Option<String> },

    #[error("no data in response")]
    MissingData,

    #[error("{field} is too long ({len} bytes, max {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),
}
