//! Assistant panel lifetime: a session exists only while the panel is open.
//!
//! Every `open` after a `close` starts a fresh session holding just the
//! greeting. Closing drops the session; a request still in flight keeps
//! running but its reply is discarded when it settles.

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::debug;

use crate::session::{AssistantSession, SessionOptions};
use crate::CompletionService;

pub struct AssistantPanel {
    service: Arc<dyn CompletionService>,
    options: SessionOptions,
    runtime: Handle,
    session: Option<AssistantSession>,
}

impl AssistantPanel {
    pub fn new(
        service: Arc<dyn CompletionService>,
        options: SessionOptions,
        runtime: Handle,
    ) -> Self {
        Self {
            service,
            options,
            runtime,
            session: None,
        }
    }

    /// Open the panel, creating a session if it was closed. Opening an
    /// already open panel keeps the current session.
    pub fn open(&mut self) -> &mut AssistantSession {
        self.session.get_or_insert_with(|| {
            AssistantSession::new(
                Arc::clone(&self.service),
                self.options,
                self.runtime.clone(),
            )
        })
    }

    /// Close the panel and discard its session. Returns `false` if it was
    /// already closed.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(session = %session.id().short(), "assistant panel closed");
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&AssistantSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut AssistantSession> {
        self.session.as_mut()
    }
}
