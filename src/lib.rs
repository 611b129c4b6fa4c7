//! trialchat - metered terminal chat against an OpenAI-compatible
//! completions endpoint.
//!
//! The core is the conversation-state and request-lifecycle manager in
//! [`chat`]: an append-only transcript, a persisted per-installation
//! trial counter with a fixed ceiling, and a controller that serializes
//! submissions one at a time and folds failures back into the
//! transcript. [`api`] holds the completion client, [`app`] the
//! terminal front ends.

pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;

pub use api::{ClientError, CompletionBackend, HttpCompletionClient, NO_RESPONSE_FALLBACK};
pub use chat::{
    ChatController, ChatView, ConversationStore, SilentRenderer, SubmitOutcome,
    TranscriptRenderer, TrialCounter, TRIALS_FILE, TRIAL_CEILING,
};
pub use cli::Cli;
pub use config::{normalize_api_url, ClientConfig, DEFAULT_MODEL, OPENROUTER_API_URL};
pub use models::{ChatRequest, ChatResponse, Message, Role};
