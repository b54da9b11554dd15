//! Assistant panel: command handling and transcript rendering.

use std::io::{self, Write};

use expensewise_ai::prompts::THINKING_INDICATOR;
use expensewise_ai::{Role, SubmitOutcome, SubmitRejection};

use super::core::ExpenseWiseApp;
use super::types::{Command, Flow, BANNER, HELP_TEXT};

impl<W: Write> ExpenseWiseApp<W> {
    pub(super) fn write_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "{HELP_TEXT}")?;
        self.out.flush()
    }

    /// Handle one line of input.
    pub(super) fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match Command::parse(line) {
            Command::Open => self.open_panel()?,
            Command::Close => {
                if self.panel.close() {
                    self.rendered = 0;
                    writeln!(self.out, "[assistant closed]")?;
                }
            }
            Command::Help => writeln!(self.out, "{HELP_TEXT}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Submit(text) => self.submit(text)?,
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    pub(super) fn open_panel(&mut self) -> io::Result<()> {
        if self.panel.is_open() {
            return Ok(());
        }
        self.panel.open();
        self.rendered = 0;
        self.render_new()
    }

    fn submit(&mut self, text: String) -> io::Result<()> {
        let Some(session) = self.panel.session_mut() else {
            if !text.trim().is_empty() {
                writeln!(self.out, "[assistant is closed, type /open]")?;
            }
            return Ok(());
        };

        session.set_draft(text);
        match session.submit_draft() {
            SubmitOutcome::Sent => {
                self.render_new()?;
                writeln!(self.out, "  {THINKING_INDICATOR}")?;
            }
            SubmitOutcome::Ignored(SubmitRejection::RequestInFlight) => {
                writeln!(
                    self.out,
                    "  {THINKING_INDICATOR} (still waiting for the previous reply)"
                )?;
            }
            SubmitOutcome::Ignored(SubmitRejection::EmptySubmission) => {}
        }
        Ok(())
    }

    /// Write transcript entries that have not been shown yet.
    pub(super) fn render_new(&mut self) -> io::Result<()> {
        let Some(session) = self.panel.session() else {
            return Ok(());
        };

        for message in session.messages().iter().skip(self.rendered) {
            let label = match message.role {
                Role::Assistant => "Assistant",
                Role::User => "You",
            };
            writeln!(self.out, "{label}: {}", message.content)?;
        }
        self.rendered = session.message_count();
        self.out.flush()
    }
}
