//! OpenRouter Probe
//!
//! Sends one chat completion request to OpenRouter, prints the status code
//! and the decoded JSON body on stdout

use anyhow::{Context, Result};
use openrouter_probe::config::{LoggingConfig, Settings};
use openrouter_probe::{ChatRequest, RequestRunner};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;

    init_logging(&settings.logging)?;
    info!("{}", openrouter_probe::version_info());
    info!("Settings loaded: {:?}", settings.openrouter);

    let runner = RequestRunner::new(&settings)?;
    let request =
        ChatRequest::single_prompt(&settings.openrouter.model, &settings.openrouter.prompt);

    let stdout = std::io::stdout();
    runner.run(&request, &mut stdout.lock()).await?;

    Ok(())
}

/// Initialize logging system
///
/// Logs go to stderr; stdout carries only the status and body lines.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    Ok(())
}
