use std::env;

use anyhow::{Context, Result};

use crate::cli::Cli;

/// Default OpenRouter chat-completions URL
pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model identifier sent when none is configured
pub const DEFAULT_MODEL: &str = "opengvlab/internvl3-14b:free";

/// Environment variable holding the bearer token. The key is only ever
/// sourced from here, never from a literal.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Configuration for the completion client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full chat-completions endpoint URL
    pub api_url: String,
    /// Bearer token for the endpoint
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl ClientConfig {
    /// Build the client configuration from CLI flags plus environment.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).with_context(|| {
            format!("{} is not set; export your OpenRouter API key", API_KEY_ENV)
        })?;

        let api_url = cli
            .api_url
            .as_deref()
            .map(normalize_api_url)
            .unwrap_or_else(|| OPENROUTER_API_URL.to_string());

        Ok(Self {
            api_url,
            api_key,
            model: cli.model.clone(),
        })
    }
}

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    // If URL already contains a path with "completions", use it as-is
    if url.contains("/completions") || url.contains("/chat") {
        return url.to_string();
    }

    // If URL ends with a slash, append path without leading slash
    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        // Append the standard OpenAI-compatible path
        format!("{}/v1/chat/completions", url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_standard_path_to_bare_urls() {
        assert_eq!(
            normalize_api_url("http://localhost:8080"),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(
            normalize_api_url("http://localhost:8080/"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn normalize_keeps_full_urls_untouched() {
        assert_eq!(
            normalize_api_url("https://openrouter.ai/api/v1/chat/completions"),
            "https://openrouter.ai/api/v1/chat/completions"
        );
        assert_eq!(
            normalize_api_url("http://host/v1/chat"),
            "http://host/v1/chat"
        );
    }
}
