use std::sync::Arc;

use crate::api::CompletionBackend;
use crate::chat::store::ConversationStore;
use crate::chat::trials::TrialCounter;
use crate::logging::ConversationLogger;
use crate::models::{Message, Role};

/// Outcome of a `submit` call. All rejections are strict no-ops:
/// transcript, counter, and draft are untouched and nothing is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One user entry and one assistant entry (reply or error text) were
    /// appended to the transcript.
    Completed,
    EmptyInput,
    Busy,
    LimitReached,
}

/// Snapshot handed to the rendering collaborator on every state change.
pub struct ChatView<'a> {
    pub messages: &'a [Message],
    pub busy: bool,
    pub limit_reached: bool,
}

/// Rendering collaborator. Receives the full transcript plus the busy
/// and limit flags after each state change.
pub trait TranscriptRenderer: Send {
    fn render(&mut self, view: ChatView<'_>);
}

/// No-op collaborator for task mode and tests.
pub struct SilentRenderer;

impl TranscriptRenderer for SilentRenderer {
    fn render(&mut self, _view: ChatView<'_>) {}
}

/// Owns the transcript and drives the submit lifecycle: Idle ->
/// Awaiting -> Idle. Failures fold back into the transcript as an
/// assistant-role `Error:` entry, so the session always returns to an
/// interactive state.
pub struct ChatController {
    pub(crate) store: ConversationStore,
    pub(crate) counter: TrialCounter,
    pub(crate) client: Arc<dyn CompletionBackend>,
    pub(crate) renderer: Box<dyn TranscriptRenderer>,
    pub(crate) model: String,
    pub(crate) busy: bool,
    pub(crate) draft: String,
    pub(crate) logger: Option<ConversationLogger>,
}

impl ChatController {
    pub fn new(
        client: Arc<dyn CompletionBackend>,
        counter: TrialCounter,
        model: String,
        renderer: Box<dyn TranscriptRenderer>,
    ) -> Self {
        Self {
            store: ConversationStore::new(),
            counter,
            client,
            renderer,
            model,
            busy: false,
            draft: String::new(),
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: ConversationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn transcript(&self) -> &[Message] {
        self.store.snapshot()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn limit_reached(&self) -> bool {
        self.counter.limit_reached()
    }

    pub fn trials_used(&self) -> u32 {
        self.counter.get()
    }

    pub fn remaining_trials(&self) -> u32 {
        self.counter.remaining()
    }

    /// Pending input text. Cleared after a successful submission,
    /// preserved after a failed one so the user can retry it.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    fn notify(&mut self) {
        let view = ChatView {
            messages: self.store.snapshot(),
            busy: self.busy,
            limit_reached: self.counter.limit_reached(),
        };
        self.renderer.render(view);
    }

    /// Accept one submission and run it to completion.
    ///
    /// At most one call is in flight at a time; a submission arriving
    /// while awaiting is rejected, not queued. The counter is
    /// incremented when the submission is accepted, before the call
    /// resolves. Whatever the network outcome, exactly one assistant
    /// entry is appended and the controller returns to idle.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        if self.busy {
            return SubmitOutcome::Busy;
        }
        if self.counter.limit_reached() {
            return SubmitOutcome::LimitReached;
        }

        self.draft = input.to_string();
        self.store = self.store.append(Message::user(input));
        self.busy = true;
        self.notify();
        self.counter.increment_and_persist();

        if let Some(logger) = &mut self.logger {
            logger.log(Role::User.as_str(), input, None).await;
        }

        let result = self.client.complete(&self.model, self.store.snapshot()).await;
        let reply = match result {
            Ok(text) => {
                self.draft.clear();
                text
            }
            Err(err) => format!("Error: {err}"),
        };

        self.store = self.store.append(Message::assistant(reply.clone()));
        if let Some(logger) = &mut self.logger {
            logger.log(Role::Assistant.as_str(), &reply, Some(&self.model)).await;
        }
        self.busy = false;
        self.notify();

        SubmitOutcome::Completed
    }
}
