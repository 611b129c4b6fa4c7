// API module - completion endpoint communication
pub mod client;

pub use client::{ClientError, CompletionBackend, HttpCompletionClient, NO_RESPONSE_FALLBACK};
