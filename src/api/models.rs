use crate::api::error::ApiError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// Field capacities enforced by the vault service, in bytes.
pub const TITLE_MAX: usize = 255;
pub const USERNAME_MAX: usize = 255;
pub const SECRET_MAX: usize = 1023;
pub const URL_MAX: usize = 511;
pub const NOTES_MAX: usize = 2047;

/// One password entry as exchanged with the vault service.
///
/// `id` is assigned by the server and never sent back on the wire. `url` and
/// `notes` are optional; the empty string means "absent" locally, and on the
/// wire they are omitted when empty. On decode, `null` and a missing key are
/// equivalent and both map to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    #[serde(default, deserialize_with = "id_or_zero", skip_serializing)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(
        rename = "password",
        default = "empty_secret",
        with = "secret_field"
    )]
    pub secret: SecretString,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "String::is_empty"
    )]
    pub notes: String,
}

impl Default for PasswordRecord {
    fn default() -> Self {
        Self {
            id: 0,
            title: String::new(),
            username: String::new(),
            secret: empty_secret(),
            url: String::new(),
            notes: String::new(),
        }
    }
}

impl PasswordRecord {
    /// Reject oversized fields before they reach the wire. The service
    /// stores bounded columns; sending more would get silently cut short.
    pub fn validate(&self) -> Result<(), ApiError> {
        check_len("title", &self.title, TITLE_MAX)?;
        check_len("username", &self.username, USERNAME_MAX)?;
        check_len("password", self.secret.expose_secret(), SECRET_MAX)?;
        check_len("url", &self.url, URL_MAX)?;
        check_len("notes", &self.notes, NOTES_MAX)
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ApiError> {
    let len = value.len();
    if len > max {
        return Err(ApiError::FieldTooLong { field, len, max });
    }
    Ok(())
}

fn empty_secret() -> SecretString {
    SecretString::new("".into())
}

/// The `{success, data, error}` wrapper every service response uses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Payload of a successful create: the only field the server is
/// authoritative for after insertion.
#[derive(Debug, Deserialize)]
pub struct AssignedId {
    #[serde(default, deserialize_with = "id_or_zero")]
    pub id: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// A missing or non-numeric id must never fail the decode; it reads as 0.
fn id_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(v.as_i64().unwrap_or(0))
}

mod secret_field {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(SecretString::new(s.into()))
    }
}
