use serde::Serialize;
use serde_json::Value;

use crate::errors::ClientError;

/// Decoded session payload that is known to carry a usable client secret.
///
/// Only `client_secret.value` is checked; every other field is kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionCredential(Value);

impl SessionCredential {
    /// Accept a decoded session body if `client_secret.value` is a non-empty string.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        match extract_client_secret(&value) {
            Some(_) => Ok(SessionCredential(value)),
            None => Err(ClientError::MissingCredential),
        }
    }

    /// The short-lived token for the realtime channel.
    pub fn client_secret(&self) -> &str {
        extract_client_secret(&self.0).unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

fn extract_client_secret(value: &Value) -> Option<&str> {
    value
        .get("client_secret")
        .and_then(|secret| secret.get("value"))
        .and_then(Value::as_str)
        .filter(|secret| !secret.is_empty())
}
