//! Assistant conversation session.
//!
//! An `AssistantSession` holds the transcript, the unsent draft, and at most
//! one outstanding completion request. Submission is two-phase: `submit`
//! appends the user turn and dispatches the request; the reply is applied
//! later by the owner through `poll` or `settle`.

mod chat;
mod manager;
mod types;


pub use manager::AssistantSession;
pub use types::{SessionOptions, SubmitOutcome, SubmitRejection, DEFAULT_REQUEST_TIMEOUT};
