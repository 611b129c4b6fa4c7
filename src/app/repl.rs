use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::build_controller;
use crate::chat::{ChatView, SubmitOutcome, TranscriptRenderer};
use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::models::Role;

/// Prints transcript entries as colored role-tagged lines. Only entries
/// added since the previous render are printed.
pub struct TerminalRenderer {
    printed: usize,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { printed: 0 }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptRenderer for TerminalRenderer {
    fn render(&mut self, view: ChatView<'_>) {
        for msg in &view.messages[self.printed..] {
            match msg.role {
                Role::User => {
                    println!("{} {}", "You:".bright_blue().bold(), msg.content);
                }
                Role::Assistant => {
                    println!("{} {}", "AI:".bright_green().bold(), msg.content);
                }
            }
        }
        self.printed = view.messages.len();

        if view.busy {
            println!("{}", "thinking...".bright_black());
        }
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli, config: ClientConfig, data_dir: PathBuf) -> Result<()> {
    println!("{}", "trialchat".bright_cyan().bold());
    println!(
        "{}",
        format!("Model: {} • Endpoint: {}", config.model, config.api_url).bright_black()
    );
    println!(
        "{}",
        "Type 'exit' or 'quit' to leave. Each sent message spends one trial.\n".bright_black()
    );

    let mut chat = build_controller(
        &config,
        &data_dir,
        Box::new(TerminalRenderer::new()),
        cli.verbose,
    )
    .await?;

    let mut rl = DefaultEditor::new()?;

    loop {
        if chat.limit_reached() {
            println!(
                "{}",
                format!(
                    "Trial limit reached ({} messages). Input is disabled.",
                    chat.trials_used()
                )
                .yellow()
            );
            break;
        }

        let prompt = format!("[{} left] > ", chat.remaining_trials());
        // A draft left over from a failed submission is pre-filled so
        // the user can retry or edit it.
        let draft = chat.draft().to_string();
        let line = rl.readline_with_initial(&prompt, (draft.as_str(), ""));

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }

                match chat.submit(&line).await {
                    SubmitOutcome::Completed => {}
                    SubmitOutcome::EmptyInput => continue,
                    SubmitOutcome::LimitReached => continue, // notice printed at loop top
                    SubmitOutcome::Busy => unreachable!("REPL submits sequentially"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("{}", "Bye!".bright_black());
    Ok(())
}
