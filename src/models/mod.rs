// Data model module - transcript messages and API request/response structures
pub mod requests;
pub mod responses;
pub mod types;

pub use requests::ChatRequest;
pub use responses::{ChatResponse, Choice, ResponseMessage, Usage};
pub use types::{Message, Role};
