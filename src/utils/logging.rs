//! Logging utilities
//!
//! Helpers that keep request logs short and free of credentials

use crate::models::chat::{ChatMessage, ChatRequest};

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_chars: usize) -> String {
    let total = s.chars().count();
    if total > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}... ({} chars truncated)", head, total - max_chars)
    } else {
        s.to_string()
    }
}

fn filter_message(msg: &ChatMessage) -> serde_json::Value {
    // System prompts get cut harder
    let max_chars = if msg.role == "system" { 100 } else { 200 };
    serde_json::json!({
        "role": msg.role,
        "content": truncate_content(&msg.content, max_chars),
    })
}

/// Create a filtered summary of a chat request for logging
/// Keeps original structure but truncates verbose content
pub fn create_request_log_summary(request: &ChatRequest) -> serde_json::Value {
    let messages: Vec<serde_json::Value> = request.messages.iter().map(filter_message).collect();
    serde_json::json!({
        "model": request.model,
        "messages": messages,
    })
}

/// Characters of a credential kept visible by `mask_secret`
const MASK_PREFIX_CHARS: usize = 6;

/// Mask a credential for display
///
/// A short prefix is shown only when the secret is at least twice as long.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= MASK_PREFIX_CHARS * 2 {
        return "***".to_string();
    }
    let prefix: String = secret.chars().take(MASK_PREFIX_CHARS).collect();
    format!("{}***", prefix)
}
