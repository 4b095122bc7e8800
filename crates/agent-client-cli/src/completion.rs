use agent_client::{ChatCompletionResponse, Message};
use serde::Deserialize;

// Only the fields the CLI reads; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct CompletionView {
    #[serde(default)]
    choices: Vec<ChoiceView>,
}

#[derive(Debug, Deserialize)]
struct ChoiceView {
    #[serde(default)]
    message: Option<MessageView>,
}

#[derive(Debug, Deserialize)]
struct MessageView {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Pull the first choice's message out of a completion, if it has text.
pub fn assistant_message(response: &ChatCompletionResponse) -> Option<Message> {
    let view: CompletionView = response.decode().ok()?;
    let message = view.choices.into_iter().next()?.message?;
    let content = message.content?;
    Some(Message::new(
        message.role.unwrap_or_else(|| "assistant".to_string()),
        content,
    ))
}
