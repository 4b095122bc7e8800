use std::sync::Arc;

use super::SESSION_PATH;
use crate::errors::ClientResult;
use crate::models::session::SessionCredential;
use crate::transport::HttpTransport;

/// Negotiates sessions with the agent service.
#[derive(Clone)]
pub struct SessionClient {
    transport: Arc<dyn HttpTransport>,
}

impl SessionClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a new session and return its credential.
    ///
    /// Every call is a fresh negotiation. Transport failures are returned
    /// unchanged; a body without a non-empty `client_secret.value` yields
    /// [`ClientError::MissingCredential`](crate::errors::ClientError::MissingCredential).
    pub async fn create_session(&self) -> ClientResult<SessionCredential> {
        self.negotiate().await.map_err(|err| {
            tracing::error!(error = %err, "Error creating session");
            err
        })
    }

    async fn negotiate(&self) -> ClientResult<SessionCredential> {
        tracing::debug!(path = SESSION_PATH, "creating session");
        let body = self.transport.get(SESSION_PATH).await?;
        let credential = SessionCredential::from_value(body)?;
        tracing::debug!("session created");
        Ok(credential)
    }
}
