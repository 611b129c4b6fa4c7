use serde::Serialize;

use super::types::Message;

/// Chat API request structure
///
/// Built fresh for every call from the current transcript and never
/// retained after the call completes.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    pub fn new(model: &str, messages: &[Message]) -> Self {
        Self {
            model: model.to_string(),
            messages: messages.to_vec(),
        }
    }
}
