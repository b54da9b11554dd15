//! Input commands understood by the terminal host.

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    Open,
    Close,
    Help,
    Quit,
    /// Anything that is not a command is sent to the assistant.
    Submit(String),
}

impl Command {
    pub(super) fn parse(line: &str) -> Self {
        match line.trim() {
            "/open" => Command::Open,
            "/close" => Command::Close,
            "/help" => Command::Help,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Submit(line.to_string()),
        }
    }
}

/// Whether the input loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

pub(super) const HELP_TEXT: &str =
    "Commands: /open  /close  /help  /quit  (anything else is sent to the assistant)";
pub(super) const BANNER: &str = "ExpenseWise AI · Powered by Gemini";
