//! Session struct, construction, draft editing, and read accessors.

use std::sync::Arc;

use expensewise_common::SessionId;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::prompts::GREETING;
use crate::{CompletionService, Message};

use super::types::{SessionOptions, Settlement, SubmitOutcome};

/// A conversation with the assistant, from panel open to panel close.
pub struct AssistantSession {
    pub(super) id: SessionId,
    /// Append-only transcript, seeded with the greeting.
    pub(super) messages: Vec<Message>,
    /// Unsent user text.
    pub(super) draft: String,
    /// Sequence number of the outstanding request, if any.
    pub(super) in_flight: Option<u64>,
    pub(super) next_request: u64,
    pub(super) service: Arc<dyn CompletionService>,
    pub(super) options: SessionOptions,
    /// Runtime the request tasks are spawned on.
    pub(super) runtime: Handle,
    pub(super) settle_tx: mpsc::UnboundedSender<Settlement>,
    pub(super) settle_rx: mpsc::UnboundedReceiver<Settlement>,
}

impl AssistantSession {
    pub fn new(
        service: Arc<dyn CompletionService>,
        options: SessionOptions,
        runtime: Handle,
    ) -> Self {
        let (settle_tx, settle_rx) = mpsc::unbounded_channel();
        let id = SessionId::new();
        debug!(session = %id.short(), "assistant session created");
        Self {
            id,
            messages: vec![Message::assistant(GREETING)],
            draft: String::new(),
            in_flight: None,
            next_request: 1,
            service,
            options,
            runtime,
            settle_tx,
            settle_rx,
        }
    }

    // -- Draft --

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_draft_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_draft_char(&mut self) -> Option<char> {
        self.draft.pop()
    }

    /// Submit the current draft. It is cleared only if the submission is sent.
    pub fn submit_draft(&mut self) -> SubmitOutcome {
        let text = self.draft.clone();
        self.submit(text)
    }

    // -- Getters --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }
}

impl Drop for AssistantSession {
    fn drop(&mut self) {
        if let Some(request) = self.in_flight {
            debug!(
                session = %self.id.short(),
                request,
                "assistant session closed with a request in flight"
            );
        }
    }
}
