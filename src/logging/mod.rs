// Logging module - data directory helpers, request and conversation logs
pub mod conversation_logger;
pub mod request_logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use conversation_logger::ConversationLogger;
pub use request_logger::{log_request, log_request_to_file, log_response_to_file};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base trialchat directory (~/.trialchat)
/// This holds the trial counter slot and the logs directory.
pub fn get_data_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let data_dir = PathBuf::from(home_dir).join(".trialchat");

    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir).context("Failed to create trialchat directory")?;
    }

    Ok(data_dir)
}

/// Get or create the logs directory under the given data directory
pub fn get_logs_dir(data_dir: &Path) -> Result<PathBuf> {
    let logs_dir = data_dir.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir).context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
