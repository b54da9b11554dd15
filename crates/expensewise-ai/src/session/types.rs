//! Session options, submission outcomes, and settlement records.

use std::time::Duration;

use crate::AiError;

/// Default upper bound on one completion request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

/// Result of a `submit` call. Rejections are not errors: the transcript is
/// simply left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Ignored(SubmitRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Text was empty after trimming.
    EmptySubmission,
    /// A previous request has not settled yet.
    RequestInFlight,
}

/// Outcome of one dispatched request, sent back to the owning session.
#[derive(Debug)]
pub(crate) struct Settlement {
    pub(crate) request: u64,
    pub(crate) result: Result<String, AiError>,
}
