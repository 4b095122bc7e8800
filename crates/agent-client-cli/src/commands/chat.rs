use agent_client::{ChatCompletionClient, ChatCompletionRequest, ChatCompletionResponse, Message};
use anyhow::{anyhow, Result};
use bat::PrettyPrinter;
use cliclack::{input, spinner};
use console::style;

use crate::completion::assistant_message;

/// Running conversation with the agent service.
///
/// A turn only lands in the history once the service has answered it.
pub struct Conversation {
    client: ChatCompletionClient,
    model: String,
    history: Vec<Message>,
}

impl Conversation {
    pub fn new(client: ChatCompletionClient, model: String, system_prompt: Option<String>) -> Self {
        let history = system_prompt.map(Message::system).into_iter().collect();
        Self {
            client,
            model,
            history,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub async fn send(&mut self, text: &str) -> Result<ChatCompletionResponse> {
        let user_message = Message::user(text);
        let request = ChatCompletionRequest::new(self.model.clone())
            .with_messages(self.history.iter().cloned())
            .with_message(user_message.clone());

        let response = self.client.create_chat_completion(&request).await?;

        self.history.push(user_message);
        if let Some(reply) = assistant_message(&response) {
            self.history.push(reply);
        }
        Ok(response)
    }
}

/// Send one message and return what should be printed.
pub async fn run_once(conversation: &mut Conversation, text: &str, raw: bool) -> Result<String> {
    let response = conversation.send(text).await?;
    Ok(format_reply(&response, raw)?)
}

/// Interactive loop; "exit" ends it.
pub async fn run_interactive(conversation: &mut Conversation, raw: bool) -> Result<()> {
    println!(
        "agent-client chat {}",
        style("- type \"exit\" to end the conversation").dim()
    );
    println!("\n");

    loop {
        let message_text: String = input("Message:").placeholder("").multiline().interact()?;

        if message_text.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let spin = spinner();
        spin.start("awaiting reply");
        let result = conversation.send(&message_text).await;
        spin.stop("");

        match result {
            Ok(response) => render(&format_reply(&response, raw)?, raw)?,
            // Already logged by the client; keep the conversation going
            Err(err) => eprintln!("{}", style(format!("Error: {}", err)).red()),
        }
        println!("\n");
    }
    Ok(())
}

fn format_reply(response: &ChatCompletionResponse, raw: bool) -> serde_json::Result<String> {
    if raw {
        return serde_json::to_string_pretty(response.as_value());
    }
    match assistant_message(response) {
        Some(message) => Ok(message.content),
        None => serde_json::to_string_pretty(response.as_value()),
    }
}

pub fn render(content: &str, raw: bool) -> Result<()> {
    let language = if raw { "json" } else { "markdown" };
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language(language)
        .print()
        .map_err(|err| anyhow!("Failed to render reply: {}", err))?;
    Ok(())
}
