//! Data models module
//!
//! Defines the chat completion request and the opaque response it produces

pub mod chat;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, Exchange};
