use std::sync::Arc;

use super::CHAT_COMPLETIONS_PATH;
use crate::errors::{ClientResult, TransportError};
use crate::models::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::transport::HttpTransport;

/// Submits chat-completion requests to the agent service.
#[derive(Clone)]
pub struct ChatCompletionClient {
    transport: Arc<dyn HttpTransport>,
}

impl ChatCompletionClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Send `request` as-is and return the service's reply untouched.
    ///
    /// Nothing is validated locally and nothing is cached: each call is one
    /// POST, and failures come back exactly as the transport raised them.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> ClientResult<ChatCompletionResponse> {
        self.submit(request).await.map_err(|err| {
            tracing::error!(error = %err, "Error creating chat completion");
            err
        })
    }

    async fn submit(
        &self,
        request: &ChatCompletionRequest,
    ) -> ClientResult<ChatCompletionResponse> {
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "creating chat completion"
        );
        let payload = serde_json::to_value(request).map_err(TransportError::from)?;
        let body = self.transport.post(CHAT_COMPLETIONS_PATH, &payload).await?;
        Ok(ChatCompletionResponse::from(body))
    }
}
