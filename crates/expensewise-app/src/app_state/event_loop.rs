//! Input loop: stdin lines and request settlement on one task.

use std::io::{self, Write};

use expensewise_ai::AssistantPanel;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::core::ExpenseWiseApp;
use super::types::Flow;

impl<W: Write> ExpenseWiseApp<W> {
    /// Run until `/quit` or end of input. The panel starts open.
    ///
    /// At end of input an outstanding request is still awaited so piped
    /// usage prints its reply.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, input: R) -> io::Result<()> {
        self.write_banner()?;
        self.open_panel()?;

        let mut lines = input.split(b'\n');
        loop {
            let pending = self.is_pending();
            tokio::select! {
                segment = lines.next_segment() => match segment? {
                    Some(bytes) => {
                        let Some(line) = decode_line(bytes) else {
                            continue;
                        };
                        if self.handle_line(&line)? == Flow::Quit {
                            break;
                        }
                    }
                    None => {
                        if settle_open(&mut self.panel).await {
                            self.render_new()?;
                        }
                        break;
                    }
                },
                settled = settle_open(&mut self.panel), if pending => {
                    if settled {
                        self.render_new()?;
                    }
                }
            }
        }

        tracing::debug!("Input loop finished");
        Ok(())
    }

    fn is_pending(&self) -> bool {
        self.panel.session().is_some_and(|s| s.is_pending())
    }
}

/// Decode one input line, dropping a trailing `\r`.
///
/// Lines that are not valid UTF-8 are logged and skipped.
fn decode_line(mut bytes: Vec<u8>) -> Option<String> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(line) => Some(line),
        Err(e) => {
            tracing::warn!("Skipping input line that is not valid UTF-8: {e}");
            None
        }
    }
}

/// Wait for the open session's outstanding request, if any.
async fn settle_open(panel: &mut AssistantPanel) -> bool {
    match panel.session_mut() {
        Some(session) => session.settle().await,
        None => false,
    }
}
