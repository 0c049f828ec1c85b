//! Change notifications for board observers.
//!
//! The store sends one [`BoardEvent`] after each applied transition so a
//! render layer can re-read the board. No-ops send nothing.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Buffered events per subscriber before the slowest one starts lagging.
const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Board change events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BoardEvent {
    CardAdded { column_id: String, card_id: String },
    CardEdited { column_id: String, card_id: String },
    CardDeleted { column_id: String, card_id: String },
    CardMoved { card_id: String, from_column_id: String, to_column_id: String },
    ColumnAdded { column_id: String },
}

/// Type alias for the event sender.
pub type EventSender = broadcast::Sender<BoardEvent>;

/// Type alias for the event receiver.
pub type EventReceiver = broadcast::Receiver<BoardEvent>;

/// Create a new event channel with default capacity.
pub fn create_event_channel() -> EventSender {
    let (tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
    tx
}
