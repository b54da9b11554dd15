//! Scripted completion service for session and panel tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::{AiError, CompletionService};

#[derive(Debug, Clone)]
pub(crate) enum Reply {
    Text(String),
    Fail,
    Hang,
}

pub(crate) struct StubService {
    reply: Reply,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubService {
    fn build(reply: Reply, gate: Option<Arc<Notify>>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            gate,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn replying(text: &str) -> Arc<Self> {
        Self::build(Reply::Text(text.to_string()), None)
    }

    pub(crate) fn failing() -> Arc<Self> {
        Self::build(Reply::Fail, None)
    }

    pub(crate) fn hanging() -> Arc<Self> {
        Self::build(Reply::Hang, None)
    }

    /// Replies with `text` once `gate` is notified.
    pub(crate) fn gated(text: &str, gate: Arc<Notify>) -> Arc<Self> {
        Self::build(Reply::Text(text.to_string()), Some(gate))
    }

    /// `(prompt, system_instruction)` of every call so far.
    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubService {
    async fn complete(&self, prompt: &str, system_instruction: &str) -> Result<String, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_instruction.to_string()));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(AiError::NetworkError("connection refused".into())),
            Reply::Hang => std::future::pending().await,
        }
    }
}
