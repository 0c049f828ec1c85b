//! Drag-and-drop session.
//!
//! At most one card is being dragged at a time. The session is cleared on
//! every way a drag can end so a stale reference can never drive a later,
//! unrelated drop.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BoardStore, Outcome};

/// The card currently being dragged and the column it was picked up from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub card_id: String,
    pub from_column_id: String,
}

impl BoardStore {
    /// Start dragging a card. Any earlier session is discarded.
    pub fn begin_drag(&mut self, card_id: &str, from_column_id: &str) {
        let session = DragSession {
            card_id: card_id.to_string(),
            from_column_id: from_column_id.to_string(),
        };
        if let Some(stale) = self.drag.replace(session) {
            debug!(card_id = %stale.card_id, "Discarded unfinished drag session");
        }
        debug!(card_id = %card_id, from = %from_column_id, "Drag started");
    }

    /// Abandon the current drag, returning the session that was cleared.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        let session = self.drag.take();
        if let Some(session) = &session {
            debug!(card_id = %session.card_id, "Drag ended");
        }
        session
    }

    /// Drop the dragged card onto `to_column_id`.
    ///
    /// The session is cleared before the move is attempted, so an invalid
    /// target still ends the drag. Without a session this does nothing.
    pub fn complete_drop(&mut self, to_column_id: &str) -> Outcome {
        let Some(session) = self.drag.take() else {
            debug!(to = %to_column_id, "Ignoring drop without a drag session");
            return Outcome::Unchanged;
        };
        self.move_card(&session.card_id, &session.from_column_id, to_column_id)
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
}
