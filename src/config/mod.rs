//! Configuration management module
//!
//! Responsible for loading configuration from environment variables and `.env` files

pub mod settings;

pub use settings::{LoggingConfig, OpenRouterConfig, Settings};
