//! Submission and settlement.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::prompts::{CONNECTION_FAILED_FALLBACK, EMPTY_REPLY_FALLBACK, SYSTEM_INSTRUCTION};
use crate::{AiError, Message};

use super::manager::AssistantSession;
use super::types::{Settlement, SubmitOutcome, SubmitRejection};

impl AssistantSession {
    /// Append a user turn and dispatch one completion request for it.
    ///
    /// Returns without waiting for the service. Blank text, or any call while
    /// a request is outstanding, leaves the session untouched.
    pub fn submit(&mut self, text: impl Into<String>) -> SubmitOutcome {
        let text = text.into();

        if text.trim().is_empty() {
            return SubmitOutcome::Ignored(SubmitRejection::EmptySubmission);
        }
        if let Some(request) = self.in_flight {
            debug!(session = %self.id.short(), request, "submit ignored: request in flight");
            return SubmitOutcome::Ignored(SubmitRejection::RequestInFlight);
        }

        self.messages.push(Message::user(text.clone()));
        self.draft.clear();

        let request = self.next_request;
        self.next_request += 1;
        self.in_flight = Some(request);

        self.dispatch(request, text);
        SubmitOutcome::Sent
    }

    /// Spawn the request task. It only reports back over the channel; if the
    /// session is gone by then the result is dropped.
    fn dispatch(&self, request: u64, prompt: String) {
        let service = Arc::clone(&self.service);
        let tx = self.settle_tx.clone();
        let timeout = self.options.request_timeout;
        let session = self.id.short().to_string();

        debug!(session = %session, request, "dispatching assistant request");

        self.runtime.spawn(async move {
            let call = service.complete(&prompt, SYSTEM_INSTRUCTION);
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, call)
                    .await
                    .unwrap_or_else(|_| Err(AiError::Timeout)),
                None => call.await,
            };

            if tx.send(Settlement { request, result }).is_err() {
                debug!(session = %session, request, "session closed; discarding assistant reply");
            }
        });
    }

    /// Apply every settlement that has already arrived. Never blocks.
    ///
    /// Returns the number of assistant messages appended.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(settlement) = self.settle_rx.try_recv() {
            if self.apply(settlement) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the outstanding request to settle and apply it.
    ///
    /// Returns `false` immediately when nothing is pending. Cancel-safe, so
    /// it can sit in a `tokio::select!` loop.
    pub async fn settle(&mut self) -> bool {
        while self.in_flight.is_some() {
            match self.settle_rx.recv().await {
                Some(settlement) => {
                    if self.apply(settlement) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    /// Append the assistant reply for `settlement` and clear the pending flag.
    /// Settlements for any other request are ignored.
    pub(super) fn apply(&mut self, settlement: Settlement) -> bool {
        if self.in_flight != Some(settlement.request) {
            debug!(
                session = %self.id.short(),
                request = settlement.request,
                "ignoring settlement for a request that is not in flight"
            );
            return false;
        }

        let content = match settlement.result {
            Ok(text) if text.is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(session = %self.id.short(), error = %e, "assistant request failed");
                CONNECTION_FAILED_FALLBACK.to_string()
            }
        };

        self.messages.push(Message::assistant(content));
        self.in_flight = None;
        debug!(
            session = %self.id.short(),
            request = settlement.request,
            "assistant request settled"
        );
        true
    }
}
