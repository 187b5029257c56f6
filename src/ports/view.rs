//! View port: the page that displays the orchestrator's output slots.

use crate::orchestrator::{InteractionState, Page};

/// Presents the page to the user.
///
/// The orchestrator owns every slot; a view only observes them.
pub trait View: Send {
    /// Called after every change to the page or the interaction state.
    fn refresh(&mut self, state: &InteractionState, page: &Page);

    /// Shows a blocking notice the user has to acknowledge.
    fn notify(&mut self, message: &str);
}
