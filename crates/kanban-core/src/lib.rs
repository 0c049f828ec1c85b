//! Kanban Core Library
//!
//! In-memory state for a Kanban board: ordered columns holding ordered
//! cards, changed only through [`BoardStore`] operations.

pub mod board;
pub mod config;
pub mod error;
pub mod notifier;

pub use board::{Board, BoardCommand, BoardStore, Card, CardFields, Column, DragSession, Outcome, Palette};
pub use config::KanbanConfig;
pub use error::{KanbanError, KanbanResult};
pub use notifier::BoardEvent;
