pub mod chat;
pub mod session;

/// Endpoint that negotiates a new conversational session.
pub const SESSION_PATH: &str = "/agent/session";

/// Endpoint that accepts chat-completion requests.
pub const CHAT_COMPLETIONS_PATH: &str = "/agent/chat/completions";
