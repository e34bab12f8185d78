use crate::api::error::ApiError;
use crate::api::models::{AssignedId, Envelope, PasswordRecord};
use crate::api::ports::{Method, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The five vault operations, composed from the transport port and the
/// envelope mapping. Each call either fully succeeds or reports one error
/// and leaves the caller's record untouched.
pub struct VaultService {
    transport: Arc<dyn Transport>,
}

impl VaultService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch every record, in the order the server returns them.
    pub fn list(&self) -> Result<Vec<PasswordRecord>, ApiError> {
        let bytes = self.transport.execute(Method::Get, "passwords", None)?;
        require_data(decode_envelope(&bytes)?)
    }

    pub fn get(&self, id: i64) -> Result<PasswordRecord, ApiError> {
        let bytes = self
            .transport
            .execute(Method::Get, &format!("passwords/{id}"), None)?;
        require_data(decode_envelope(&bytes)?)
    }

    /// Create `record` on the server. On success the server-assigned id is
    /// written back into `record`; on failure `record` is left as it was.
    pub fn add(&self, record: &mut PasswordRecord) -> Result<(), ApiError> {
        record.validate()?;
        let body = serde_json::to_vec(record)?;
        let bytes = self
            .transport
            .execute(Method::Post, "passwords", Some(&body))?;
        let assigned: AssignedId = require_data(decode_envelope(&bytes)?)?;
        record.id = assigned.id;
        Ok(())
    }

    /// Overwrite the server copy with the full record, unchanged fields
    /// included.
    pub fn update(&self, record: &PasswordRecord) -> Result<(), ApiError> {
        record.validate()?;
        let body = serde_json::to_vec(record)?;
        let bytes = self.transport.execute(
            Method::Put,
            &format!("passwords/{}", record.id),
            Some(&body),
        )?;
        // Only the success flag matters here; no data is expected back.
        accepted(decode_envelope::<serde_json::Value>(&bytes)?)?;
        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let bytes = self
            .transport
            .execute(Method::Delete, &format!("passwords/{id}"), None)?;
        accepted(decode_envelope::<serde_json::Value>(&bytes)?)?;
        Ok(())
    }
}

fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<Envelope<T>, ApiError> {
    Ok(serde_json::from_slice(bytes)?)
}

// A missing or false `success` rejects the response before `data` is looked
// at, carrying the server's error message when it sent one.
fn accepted<T>(envelope: Envelope<T>) -> Result<Option<T>, ApiError> {
    if !envelope.success {
        return Err(ApiError::Rejected {
            message: envelope.error,
        });
    }
    Ok(envelope.data)
}

fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    accepted(envelope)?.ok_or(ApiError::MissingData)
}
