use anyhow::Result;
use clap::{CommandFactory, Parser};

use trialchat::app::{run_repl_mode, run_task_mode};
use trialchat::cli::Cli;
use trialchat::config::ClientConfig;
use trialchat::logging::get_data_dir;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = ClientConfig::from_cli(&cli)?;

    let data_dir = match &cli.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.clone()
        }
        None => get_data_dir()?,
    };

    if let Some(task_text) = cli.task.clone() {
        return run_task_mode(&cli, config, data_dir, task_text).await;
    }

    run_repl_mode(&cli, config, data_dir).await
}
