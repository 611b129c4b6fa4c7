use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::DEFAULT_MODEL;

/// CLI arguments for trialchat
#[derive(Parser)]
#[command(name = "trialchat")]
#[command(about = "Metered terminal chat against an OpenAI-compatible completions endpoint")]
#[command(version)]
pub struct Cli {
    /// Model identifier sent with every completion request
    #[arg(long, value_name = "MODEL", env = "TRIALCHAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Chat-completions endpoint; bare base URLs get the standard
    /// /v1/chat/completions path appended
    #[arg(long, value_name = "URL", env = "TRIALCHAT_API_URL")]
    pub api_url: Option<String>,

    /// Run one prompt non-interactively, print the reply, and exit
    #[arg(long, value_name = "TEXT")]
    pub task: Option<String>,

    /// Directory for the trial counter and logs (default ~/.trialchat)
    #[arg(long, value_name = "DIR", env = "TRIALCHAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print request debug information to the console
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,
}
