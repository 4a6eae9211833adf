//! Chat model serialization tests

use openrouter_probe::{ChatMessage, ChatRequest, Exchange};
use serde_json::json;

#[test]
fn test_request_contains_only_model_and_messages() {
    let request =
        ChatRequest::single_prompt("deepseek/deepseek-r1:free", "What is the meaning of life?");
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "model": "deepseek/deepseek-r1:free",
            "messages": [
                {"role": "user", "content": "What is the meaning of life?"}
            ]
        })
    );
}

#[test]
fn test_message_order_and_fields_preserved() {
    let messages = vec![
        ChatMessage::system("  leading and trailing  "),
        ChatMessage::user("línea con acentos \"quoted\"\n"),
        ChatMessage::new("tool", "{\"raw\":1}"),
    ];
    let request = ChatRequest::new("m", messages.clone());

    let serialized = serde_json::to_string(&request).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&serialized).unwrap();
    let parsed_messages = parsed["messages"].as_array().unwrap();

    assert_eq!(parsed_messages.len(), messages.len());
    for (parsed, original) in parsed_messages.iter().zip(&messages) {
        assert_eq!(parsed["role"], original.role.as_str());
        assert_eq!(parsed["content"], original.content.as_str());
        assert_eq!(parsed.as_object().unwrap().len(), 2);
    }
}

#[test]
fn test_serialized_key_order() {
    let request = ChatRequest::single_prompt("m", "hi");
    let serialized = serde_json::to_string(&request).unwrap();
    assert_eq!(serialized, r#"{"model":"m","messages":[{"role":"user","content":"hi"}]}"#);
}

#[test]
fn test_exchange_equality() {
    let a = Exchange { status: 429, body: json!({"error": "rate limited"}) };
    let b = Exchange { status: 429, body: json!({"error": "rate limited"}) };
    assert_eq!(a, b);
}
