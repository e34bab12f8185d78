use crate::api::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One authenticated request against the vault service. `path` is relative
/// to the configured base URL; `body` is a UTF-8 JSON byte sequence and is
/// only given for POST/PUT. Returns the full response body.
pub trait Transport: Send + Sync {
    fn execute(&self, method: Method, path: &str, body: Option<&[u8]>) -> Result<Vec<u8>, ApiError>;
}
