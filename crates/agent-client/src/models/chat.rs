use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::message::Message;

/// Body of a chat-completion request, sent to the service as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatCompletionRequest {
    pub fn new<S: Into<String>>(model: S) -> Self {
        ChatCompletionRequest {
            model: model.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_messages<I: IntoIterator<Item = Message>>(mut self, messages: I) -> Self {
        self.messages.extend(messages);
        self
    }
}

/// Completion payload exactly as the agent service returned it.
///
/// The schema belongs to the service, so nothing is checked here. Callers that
/// want a typed view decode it themselves with [`ChatCompletionResponse::decode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletionResponse(Value);

impl ChatCompletionResponse {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.0)
    }
}

impl From<Value> for ChatCompletionResponse {
    fn from(value: Value) -> Self {
        ChatCompletionResponse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_without_extra_fields() -> serde_json::Result<()> {
        let request = ChatCompletionRequest::new("gpt-test")
            .with_message(Message::system("be brief"))
            .with_messages(vec![Message::user("hello"), Message::assistant("hi")]);

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "model": "gpt-test",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"},
                    {"role": "assistant", "content": "hi"}
                ]
            })
        );
        Ok(())
    }

    #[test]
    fn test_response_decode_into_caller_type() -> serde_json::Result<()> {
        #[derive(Deserialize)]
        struct Partial {
            id: String,
        }

        let response = ChatCompletionResponse::from(json!({"id": "cmpl-1", "choices": []}));
        let partial: Partial = response.decode()?;
        assert_eq!(partial.id, "cmpl-1");
        assert_eq!(response.into_inner(), json!({"id": "cmpl-1", "choices": []}));
        Ok(())
    }

    #[test]
    fn test_response_decode_mismatch_is_an_error() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Strict {
            id: u64,
        }

        let response = ChatCompletionResponse::from(json!({"id": "not-a-number"}));
        assert!(response.decode::<Strict>().is_err());
    }
}
