//! Error handling module tests

use openrouter_probe::utils::error::*;

#[test]
fn test_decode_error_from_serde() {
    let json_error = serde_json::from_str::<serde_json::Value>("oops").unwrap_err();
    let error: RunError = json_error.into();

    assert!(matches!(error, RunError::Decode(_)));
    assert_eq!(error.kind(), "decode_error");
}

#[test]
fn test_output_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error: RunError = io_error.into();

    assert_eq!(error.kind(), "output_error");
    assert!(error.to_string().contains("pipe closed"));
}

#[tokio::test]
async fn test_transport_error_from_reqwest() {
    let client = reqwest::Client::new();
    let reqwest_error = client
        .get("http://invalid-url-that-does-not-exist.invalid")
        .send()
        .await
        .unwrap_err();
    let error: RunError = reqwest_error.into();

    assert_eq!(error.kind(), "transport_error");
    assert!(error.to_string().starts_with("Transport error"));
}

#[test]
fn test_run_result_propagation() {
    fn parse(body: &str) -> RunResult<serde_json::Value> {
        Ok(serde_json::from_str(body)?)
    }

    assert!(parse(r#"{"a":1}"#).is_ok());
    assert!(matches!(parse("not json"), Err(RunError::Decode(_))));
}
