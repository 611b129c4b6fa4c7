// Chat module - transcript store, trial metering, and the submit lifecycle
pub mod controller;
pub mod store;
pub mod trials;


pub use controller::{ChatController, ChatView, SilentRenderer, SubmitOutcome, TranscriptRenderer};
pub use store::ConversationStore;
pub use trials::{TrialCounter, TRIALS_FILE, TRIAL_CEILING};
