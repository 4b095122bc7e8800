pub mod clients;
pub mod errors;
pub mod factory;
pub mod models;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use clients::{
    chat::ChatCompletionClient, session::SessionClient, CHAT_COMPLETIONS_PATH, SESSION_PATH,
};
pub use errors::{ClientError, ClientResult, TransportError};
pub use factory::{create_clients, AgentClients};
pub use models::{
    chat::{ChatCompletionRequest, ChatCompletionResponse},
    message::Message,
    session::SessionCredential,
};
pub use transport::{config::TransportConfig, http::HttpClientTransport, HttpTransport};
