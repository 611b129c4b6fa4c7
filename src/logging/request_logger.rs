use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::logging::safe_truncate;
use crate::models::ChatRequest;

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &ChatRequest, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());
    println!("{}: {}", "URL".bright_yellow(), url);

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!(
        "  Authorization: Bearer {}***",
        &api_key.chars().take(10).collect::<String>()
    );

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            // Truncate very long requests for readability
            if json.chars().count() > 5000 {
                println!("{}", safe_truncate(&json, 5000));
                println!(
                    "\n{}",
                    format!("... (truncated, total {} bytes)", json.len()).bright_black()
                );
            } else {
                println!("{}", json);
            }
        }
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP request to file for persistent debugging
pub fn log_request_to_file(
    logs_dir: &Path,
    url: &str,
    request: &ChatRequest,
    api_key: &str,
) -> Result<()> {
    let timestamp = unix_timestamp();
    let model_name = request.model.replace('/', "-");
    let file_path = logs_dir.join(format!("req-{}-{}.txt", timestamp, model_name));

    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n", request.model));
    log_content.push_str(&format!("URL: {}\n\n", url));

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!(
        "  Authorization: Bearer {}***\n\n",
        &api_key.chars().take(10).collect::<String>()
    ));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    Ok(())
}

/// Log raw HTTP response body to file for persistent debugging
pub fn log_response_to_file(logs_dir: &Path, model: &str, body: &str) -> Result<()> {
    let timestamp = unix_timestamp();
    let model_name = model.replace('/', "-");
    let file_path = logs_dir.join(format!("resp-{}-{}.txt", timestamp, model_name));

    fs::write(&file_path, body)
        .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use tempfile::TempDir;

    #[test]
    fn request_log_redacts_the_api_key() {
        let dir = TempDir::new().unwrap();
        let request = ChatRequest::new("acme/test-model:free", &[Message::user("hi")]);

        log_request_to_file(dir.path(), "https://example.test/v1/chat/completions", &request, "sk-or-v1-abcdef0123456789").unwrap();

        let entry = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let content = fs::read_to_string(entry.path()).unwrap();
        assert!(content.contains("Bearer sk-or-v1-a***"));
        assert!(!content.contains("abcdef0123456789"));
        // Slashes in the model id are not valid in file names.
        assert!(entry.file_name().to_string_lossy().contains("acme-test-model:free"));
    }

    #[test]
    fn response_log_writes_the_raw_body() {
        let dir = TempDir::new().unwrap();
        log_response_to_file(dir.path(), "acme/test", r#"{"choices":[]}"#).unwrap();

        let entry = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        assert_eq!(fs::read_to_string(entry.path()).unwrap(), r#"{"choices":[]}"#);
    }
}
