//! ExpenseWiseApp struct definition and constructor.

use std::io::Write;

use expensewise_ai::AssistantPanel;
use expensewise_common::ExpenseWiseError;
use expensewise_config::ExpenseWiseConfig;
use tokio::runtime::Handle;

use super::init::{build_service, session_options};

/// Top-level application state.
pub struct ExpenseWiseApp<W: Write> {
    pub(super) panel: AssistantPanel,
    /// Transcript entries of the open session already written to `out`.
    pub(super) rendered: usize,
    pub(super) out: W,
}

impl<W: Write> ExpenseWiseApp<W> {
    pub fn new(
        config: &ExpenseWiseConfig,
        runtime: Handle,
        out: W,
    ) -> Result<Self, ExpenseWiseError> {
        let service = build_service(&config.assistant)?;
        let panel = AssistantPanel::new(service, session_options(&config.assistant), runtime);
        Ok(Self::with_panel(panel, out))
    }

    pub(super) fn with_panel(panel: AssistantPanel, out: W) -> Self {
        Self {
            panel,
            rendered: 0,
            out,
        }
    }
}
