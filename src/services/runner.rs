//! Request runner
//!
//! Performs one chat completion exchange and reports the raw outcome

use crate::config::Settings;
use crate::models::chat::{ChatRequest, ChatResponse, Exchange};
use crate::utils::error::RunResult;
use crate::utils::logging::{create_request_log_summary, mask_secret};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn, Instrument};
use uuid::Uuid;

/// Single-shot chat completion runner
///
/// Every status code the remote returns is an outcome; only transport and
/// decoding failures are errors. Nothing is retried.
#[derive(Clone)]
pub struct RequestRunner {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for RequestRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestRunner")
            .field("endpoint", &self.endpoint)
            .field("api_key", &mask_secret(&self.api_key))
            .finish()
    }
}

impl RequestRunner {
    /// Create a runner from application settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("openrouter-probe/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = settings.openrouter.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: settings.openrouter.chat_completions_url(),
            api_key: settings.openrouter.api_key.clone(),
        })
    }

    /// Endpoint the runner posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the request and decode the body, without writing anything
    pub async fn send(&self, request: &ChatRequest) -> RunResult<Exchange> {
        self.run(request, &mut std::io::sink()).await
    }

    /// Send the request and write the status line, then the body line
    ///
    /// The status line is written as soon as the response head arrives, so a
    /// decode failure leaves exactly one line behind and a transport failure
    /// leaves none.
    pub async fn run<W: Write>(&self, request: &ChatRequest, out: &mut W) -> RunResult<Exchange> {
        let span = tracing::info_span!(
            "chat_completion",
            request_id = %Uuid::new_v4(),
            model = %request.model
        );
        self.exchange(request, out).instrument(span).await
    }

    async fn exchange<W: Write>(&self, request: &ChatRequest, out: &mut W) -> RunResult<Exchange> {
        let response = self.dispatch(request).await?;
        let status = response.status().as_u16();
        writeln!(out, "{}", status)?;
        out.flush()?;

        let body = Self::decode(response).await?;
        writeln!(out, "{}", body)?;
        out.flush()?;

        Ok(Exchange { status, body })
    }

    /// Issue the POST and wait for the response head
    async fn dispatch(&self, request: &ChatRequest) -> RunResult<Response> {
        debug!("Sending chat completion request to {}", self.endpoint);
        debug!("Request summary: {}", create_request_log_summary(request));

        let start_time = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Chat completion request failed: {}", e);
                e
            })?;

        let status = response.status();
        let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;
        if status.is_success() {
            info!("Response received: {} - Duration: {:.2}ms", status, elapsed_ms);
        } else {
            warn!("Non-success response received: {} - Duration: {:.2}ms", status, elapsed_ms);
        }

        Ok(response)
    }

    /// Read the full body and parse it as JSON
    async fn decode(response: Response) -> RunResult<ChatResponse> {
        let bytes = response.bytes().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            e
        })?;

        serde_json::from_slice::<ChatResponse>(&bytes).map_err(|e| {
            error!("Response body is not valid JSON ({} bytes): {}", bytes.len(), e);
            e.into()
        })
    }
}
