use std::sync::Arc;

use crate::clients::{chat::ChatCompletionClient, session::SessionClient};
use crate::errors::TransportError;
use crate::transport::{config::TransportConfig, http::HttpClientTransport, HttpTransport};

/// Both clients, sharing one transport.
#[derive(Clone)]
pub struct AgentClients {
    pub session: SessionClient,
    pub chat: ChatCompletionClient,
}

impl AgentClients {
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            session: SessionClient::new(Arc::clone(&transport)),
            chat: ChatCompletionClient::new(transport),
        }
    }
}

pub fn create_clients(config: TransportConfig) -> Result<AgentClients, TransportError> {
    let transport = HttpClientTransport::new(config)?;
    Ok(AgentClients::with_transport(Arc::new(transport)))
}
