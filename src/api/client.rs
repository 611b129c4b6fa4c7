use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::logging::{log_request, log_request_to_file, log_response_to_file};
use crate::models::{ChatRequest, ChatResponse, Message};

/// Soft-fallback text returned when a 2xx response carries no usable
/// `choices[0].message.content`. Not an error.
pub const NO_RESPONSE_FALLBACK: &str = "No response";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to reach completion endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {status} - {body}")]
    Http { status: u16, body: String },
}

/// Completion endpoint seam. The controller only sees this trait, so
/// tests substitute canned backends.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send the full transcript and return the assistant continuation.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, ClientError>;
}

/// reqwest-backed client for OpenAI-compatible chat-completions endpoints.
///
/// One shot per call: no retry, no cache, no streaming, no timeout beyond
/// the transport default.
pub struct HttpCompletionClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
    logs_dir: Option<PathBuf>,
    verbose: bool,
}

impl HttpCompletionClient {
    pub fn new(api_url: String, api_key: String, logs_dir: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            api_url,
            api_key,
            client: reqwest::Client::new(),
            logs_dir,
            verbose,
        }
    }

    /// Pull the assistant text out of a success body, soft-falling back
    /// when the body is not the expected shape.
    fn extract_content(body: &str) -> String {
        match serde_json::from_str::<ChatResponse>(body) {
            Ok(parsed) => parsed
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string()),
            Err(_) => NO_RESPONSE_FALLBACK.to_string(),
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, ClientError> {
        let request = ChatRequest::new(model, messages);

        log_request(&self.api_url, &request, &self.api_key, self.verbose);
        if let Some(logs_dir) = &self.logs_dir {
            let _ = log_request_to_file(logs_dir, &self.api_url, &request, &self.api_key);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        if let Some(logs_dir) = &self.logs_dir {
            let _ = log_response_to_file(logs_dir, model, &body);
        }

        Ok(Self::extract_content(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_content_from_success_body() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        assert_eq!(HttpCompletionClient::extract_content(body), "hello");
    }

    #[test]
    fn missing_choices_falls_back() {
        assert_eq!(
            HttpCompletionClient::extract_content(r#"{"id":"gen-1"}"#),
            NO_RESPONSE_FALLBACK
        );
    }

    #[test]
    fn null_content_falls_back() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(HttpCompletionClient::extract_content(body), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn non_json_body_falls_back() {
        assert_eq!(
            HttpCompletionClient::extract_content("<html>gateway</html>"),
            NO_RESPONSE_FALLBACK
        );
    }

    #[test]
    fn non_text_content_falls_back() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":42}}]}"#;
        assert_eq!(HttpCompletionClient::extract_content(body), NO_RESPONSE_FALLBACK);
    }

    #[test]
    fn http_error_display_carries_status_and_body() {
        let err = ClientError::Http {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 429 - rate limited");
    }
}
