//! Per-session state and the user-level operations built on it

mod assistant;
mod state;

pub use assistant::{error_answer, DocumentAssistant, ANSWER_ERROR_PREFIX};
pub use state::{ConversationLog, Session};
