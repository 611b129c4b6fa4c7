use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::app::build_controller;
use crate::chat::{SilentRenderer, SubmitOutcome};
use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::models::Role;

/// Run one prompt non-interactively and print the reply to stdout.
/// Spends one trial like an interactive submission.
pub async fn run_task_mode(
    cli: &Cli,
    config: ClientConfig,
    data_dir: PathBuf,
    task_text: String,
) -> Result<()> {
    let mut chat = build_controller(&config, &data_dir, Box::new(SilentRenderer), cli.verbose).await?;

    match chat.submit(&task_text).await {
        SubmitOutcome::Completed => {}
        SubmitOutcome::EmptyInput => bail!("task text is empty"),
        SubmitOutcome::LimitReached => bail!(
            "trial limit reached ({} messages used)",
            chat.trials_used()
        ),
        SubmitOutcome::Busy => bail!("another submission is already in flight"),
    }

    let reply = chat
        .transcript()
        .iter()
        .rev()
        .find(|m| m.role == Role::Assistant)
        .map(|m| m.content.as_str())
        .unwrap_or_default();
    println!("{}", reply);

    Ok(())
}
