// App module - interactive REPL and one-shot task mode
pub mod repl;
pub mod task;

pub use repl::run_repl_mode;
pub use task::run_task_mode;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::chat::{ChatController, TranscriptRenderer, TrialCounter};
use crate::config::ClientConfig;
use crate::api::HttpCompletionClient;
use crate::logging::{get_logs_dir, ConversationLogger};

/// Wire up the controller from configuration: counter slot and logs
/// under `data_dir`, reqwest client against the configured endpoint.
pub async fn build_controller(
    config: &ClientConfig,
    data_dir: &Path,
    renderer: Box<dyn TranscriptRenderer>,
    verbose: bool,
) -> Result<ChatController> {
    let logs_dir = get_logs_dir(data_dir)?;

    let client = Arc::new(HttpCompletionClient::new(
        config.api_url.clone(),
        config.api_key.clone(),
        Some(logs_dir.clone()),
        verbose,
    ));

    let counter = TrialCounter::in_dir(data_dir);
    let controller = ChatController::new(client, counter, config.model.clone(), renderer);

    // Conversation logging is best-effort; run without it when the log
    // file cannot be created.
    match ConversationLogger::new(&logs_dir).await {
        Ok(logger) => Ok(controller.with_logger(logger)),
        Err(e) => {
            eprintln!("Conversation logging disabled: {}", e);
            Ok(controller)
        }
    }
}
