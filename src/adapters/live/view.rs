//! Terminal view: reports progress and notices on a writer (stderr by default).
//!
//! The final rendering of the results area is printed by the command, in the
//! format the user asked for; this view only covers what happens meanwhile.

use std::io::{self, Write};

use crate::orchestrator::{InteractionState, Page, COPY_LABEL};
use crate::ports::View;
use crate::render::ResultsPanel;

/// Writes progress notices and blocking notices to a terminal stream.
pub struct TerminalView<W: Write + Send = io::Stderr> {
    out: W,
    announced: bool,
    copy_label: &'static str,
}

impl TerminalView {
    /// A view writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TerminalView<W> {
    /// A view writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, announced: false, copy_label: COPY_LABEL }
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> View for TerminalView<W> {
    fn refresh(&mut self, state: &InteractionState, page: &Page) {
        match (state, &page.results) {
            (InteractionState::Loading, ResultsPanel::Pending(notice)) if !self.announced => {
                let _ = writeln!(self.out, "{notice}");
                self.announced = true;
            }
            (InteractionState::Loading, _) => {}
            _ => self.announced = false,
        }

        if page.copy.label != self.copy_label {
            if page.copy.label != COPY_LABEL {
                let _ = writeln!(self.out, "{}", page.copy.label);
            }
            self.copy_label = page.copy.label;
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.out, "{message}");
    }
}
