//! Chat completion data models
//!
//! Request body sent to the chat completion endpoint and the raw outcome

use serde::{Deserialize, Serialize};

/// Chat completion request body
///
/// Serializes to exactly `model` and `messages`. Messages are forwarded as
/// given, including an empty list; the remote service decides how to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Message list, in conversation order
    pub messages: Vec<ChatMessage>,
}

/// Single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role (system/user/assistant)
    pub role: String,
    /// Message text
    pub content: String,
}

/// Decoded response body, never inspected
pub type ChatResponse = serde_json::Value;

/// Outcome of one request/response exchange
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// HTTP status code, any value including 4xx/5xx
    pub status: u16,
    /// Decoded JSON body
    pub body: ChatResponse,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    /// Request with a single user message
    pub fn single_prompt(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self::new(model, vec![ChatMessage::user(prompt)])
    }
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prompt() {
        let request = ChatRequest::single_prompt("deepseek/deepseek-r1:free", "Hi");
        assert_eq!(request.model, "deepseek/deepseek-r1:free");
        assert_eq!(request.messages, vec![ChatMessage::user("Hi")]);
    }

    #[test]
    fn test_serialized_keys() {
        let request = ChatRequest::single_prompt("m", "Hi");
        let value = serde_json::to_value(&request).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(value.get("model").is_some());
        assert!(value.get("messages").is_some());
    }
}
