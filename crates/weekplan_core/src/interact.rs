//! Request/response replacement for blocking confirm dialogs.
//!
//! The core never blocks on user input: destructive operations hand the
//! caller a [`Confirmation`] carrying a display message and the deferred
//! [`PendingAction`]. The caller shows the message through whatever UI it
//! owns and, on a yes, feeds the accepted action back into
//! `PlannerApp::apply`. Dropping the confirmation declines it.

use crate::model::list::ListId;
use crate::model::note::NoteId;
use crate::model::placement::PlacementId;
use crate::model::task::TaskId;

/// A destructive operation awaiting caller approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTask(TaskId),
    DeleteList(ListId),
    DeleteNote(NoteId),
    RemovePlacement(PlacementId),
}

/// A confirmation request emitted by the core.
#[derive(Debug, Clone)]
pub struct Confirmation {
    message: String,
    action: PendingAction,
}

impl Confirmation {
    pub(crate) fn new(message: impl Into<String>, action: PendingAction) -> Self {
        Self {
            message: message.into(),
            action,
        }
    }

    /// Text to show the user.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the confirmation, yielding the action to apply.
    pub fn accept(self) -> PendingAction {
        self.action
    }
}
