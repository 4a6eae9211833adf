//! OpenRouter Probe Library
//!
//! Sends a single chat completion request and reports the raw outcome

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{ChatMessage, ChatRequest, ChatResponse, Exchange};
pub use services::RequestRunner;
pub use utils::error::{RunError, RunResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
