use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;

pub mod config;
pub mod http;
pub mod mock;

/// Pre-configured request issuer shared by the clients.
///
/// Base URL, authentication and default headers belong to the implementation;
/// callers only name the path.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET to `path` and return the decoded body
    async fn get(&self, path: &str) -> Result<Value, TransportError>;

    /// Issue a POST of `body` to `path` and return the decoded body
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}
