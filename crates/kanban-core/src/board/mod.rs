//! Board state container.
//!
//! [`BoardStore`] owns the authoritative [`Board`] and is the only way to
//! mutate it. Every operation is total: it either applies one atomic
//! transition or leaves the board exactly as it was. References to columns
//! or cards that no longer exist are ignored rather than reported, since a
//! UI can easily send them after rapid user action. Empty titles are the
//! one thing rejected with an error, before anything is touched.

pub mod command;
pub mod drag;
pub mod model;
pub mod palette;

pub use command::BoardCommand;
pub use drag::DragSession;
pub use model::{Board, Card, CardFields, Column};
pub use palette::{Palette, TagColor, COLUMN_COLORS, TAG_COLORS};

use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{KanbanConfig, Seed};
use crate::error::{KanbanError, KanbanResult};
use crate::notifier::{create_event_channel, BoardEvent, EventReceiver, EventSender};

/// Whether an operation changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Unchanged,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Owner of the board value, the drag session and the change channel.
pub struct BoardStore {
    board: Board,
    palette: Palette,
    /// Every id ever seeded or generated, including deleted ones.
    issued_ids: HashSet<String>,
    drag: Option<DragSession>,
    tx: EventSender,
}

impl BoardStore {
    /// Create a store holding an empty board.
    pub fn new(palette: Palette) -> Self {
        Self::build(Board::default(), palette)
    }

    /// Create a store seeded with `board`, which must satisfy the invariants.
    pub fn with_board(board: Board, palette: Palette) -> KanbanResult<Self> {
        board.check_invariants()?;
        Ok(Self::build(board, palette))
    }

    /// Create a store from loaded configuration.
    pub fn from_config(config: &KanbanConfig) -> KanbanResult<Self> {
        let palette = config.palette()?;
        let board = match config.seed {
            Seed::Demo => Board::demo(&palette),
            Seed::Empty => Board::default(),
        };
        Self::with_board(board, palette)
    }

    fn build(board: Board, palette: Palette) -> Self {
        let issued_ids = board.ids().map(str::to_string).collect();
        info!(
            columns = board.columns.len(),
            cards = board.card_count(),
            "Board store initialized"
        );
        Self {
            board,
            palette,
            issued_ids,
            drag: None,
            tx: create_event_channel(),
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An owned copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Receive a [`BoardEvent`] after every applied transition.
    pub fn subscribe(&self) -> EventReceiver {
        self.tx.subscribe()
    }

    /// Strict column lookup.
    pub fn column(&self, column_id: &str) -> KanbanResult<&Column> {
        self.locate_column(column_id)
            .map(|i| &self.board.columns[i])
            .ok_or_else(|| KanbanError::ColumnNotFound(column_id.to_string()))
    }

    /// Strict card lookup within a column.
    pub fn card(&self, column_id: &str, card_id: &str) -> KanbanResult<&Card> {
        let col = self.column(column_id)?;
        col.card(card_id)
            .ok_or_else(|| KanbanError::CardNotFound(card_id.to_string()))
    }

    /// Append a new card to the end of a column.
    ///
    /// Returns `Ok(None)` when the column does not exist.
    pub fn add_card(&mut self, column_id: &str, fields: CardFields) -> KanbanResult<Option<Card>> {
        let fields = fields.trimmed();
        if let Err(e) = fields.validate() {
            warn!(column_id = %column_id, "Rejected card without a title");
            return Err(e);
        }
        let Some(col) = self.locate_column(column_id) else {
            debug!(column_id = %column_id, "Ignoring add_card for unknown column");
            return Ok(None);
        };

        let card = Card::new(self.next_id(), fields);
        self.board.columns[col].cards.push(card.clone());
        debug!(card_id = %card.id, column_id = %column_id, "Card added");
        self.emit(BoardEvent::CardAdded {
            column_id: column_id.to_string(),
            card_id: card.id.clone(),
        });
        Ok(Some(card))
    }

    /// Replace a card's fields in place. Its id and position are kept.
    pub fn edit_card(
        &mut self,
        column_id: &str,
        card_id: &str,
        fields: CardFields,
    ) -> KanbanResult<Outcome> {
        let fields = fields.trimmed();
        if let Err(e) = fields.validate() {
            warn!(card_id = %card_id, "Rejected edit that clears the card title");
            return Err(e);
        }
        let Some((col, pos)) = self.locate_card(column_id, card_id) else {
            debug!(card_id = %card_id, column_id = %column_id, "Ignoring edit of unknown card");
            return Ok(Outcome::Unchanged);
        };
        if self.board.columns[col].cards[pos].fields() == fields {
            debug!(card_id = %card_id, column_id = %column_id, "Ignoring edit with identical fields");
            return Ok(Outcome::Unchanged);
        }

        self.board.columns[col].cards[pos].apply(fields);
        debug!(card_id = %card_id, column_id = %column_id, "Card edited");
        self.emit(BoardEvent::CardEdited {
            column_id: column_id.to_string(),
            card_id: card_id.to_string(),
        });
        Ok(Outcome::Applied)
    }

    /// Remove a card. Deleting a card that is already gone is a no-op.
    pub fn delete_card(&mut self, column_id: &str, card_id: &str) -> Outcome {
        let Some((col, pos)) = self.locate_card(column_id, card_id) else {
            debug!(card_id = %card_id, column_id = %column_id, "Ignoring delete of unknown card");
            return Outcome::Unchanged;
        };

        self.board.columns[col].cards.remove(pos);
        debug!(card_id = %card_id, column_id = %column_id, "Card deleted");
        self.emit(BoardEvent::CardDeleted {
            column_id: column_id.to_string(),
            card_id: card_id.to_string(),
        });
        Outcome::Applied
    }

    /// Move a card to the end of another column.
    ///
    /// Moving within the same column never changes anything; reordering
    /// inside a column is not supported. The move is skipped unless the
    /// source column still holds the card and the target column exists.
    pub fn move_card(&mut self, card_id: &str, from_column_id: &str, to_column_id: &str) -> Outcome {
        if from_column_id == to_column_id {
            debug!(card_id = %card_id, column_id = %from_column_id, "Ignoring move within the same column");
            return Outcome::Unchanged;
        }
        let Some((from, pos)) = self.locate_card(from_column_id, card_id) else {
            debug!(card_id = %card_id, from = %from_column_id, "Ignoring move of card not in source column");
            return Outcome::Unchanged;
        };
        let Some(to) = self.locate_column(to_column_id) else {
            debug!(card_id = %card_id, to = %to_column_id, "Ignoring move to unknown column");
            return Outcome::Unchanged;
        };

        let card = self.board.columns[from].cards.remove(pos);
        self.board.columns[to].cards.push(card);
        debug!(card_id = %card_id, from = %from_column_id, to = %to_column_id, "Card moved");
        self.emit(BoardEvent::CardMoved {
            card_id: card_id.to_string(),
            from_column_id: from_column_id.to_string(),
            to_column_id: to_column_id.to_string(),
        });
        Outcome::Applied
    }

    /// Append an empty column. Its accent color is the palette entry at the
    /// current column count, wrapping around.
    pub fn add_column(&mut self, title: &str) -> KanbanResult<Column> {
        let title = title.trim();
        if let Err(e) = model::validate_title(title, "column") {
            warn!("Rejected column without a title");
            return Err(e);
        }

        let column = Column {
            id: self.next_id(),
            title: title.to_string(),
            color: self.palette.column_color(self.board.columns.len()).to_string(),
            cards: Vec::new(),
        };
        self.board.columns.push(column.clone());
        debug!(column_id = %column.id, color = %column.color, "Column added");
        self.emit(BoardEvent::ColumnAdded {
            column_id: column.id.clone(),
        });
        Ok(column)
    }

    fn locate_column(&self, column_id: &str) -> Option<usize> {
        self.board.columns.iter().position(|c| c.id == column_id)
    }

    /// Shared lookup for every card operation: (column index, card index).
    fn locate_card(&self, column_id: &str, card_id: &str) -> Option<(usize, usize)> {
        let col = self.locate_column(column_id)?;
        let pos = self.board.columns[col].position(card_id)?;
        Some((col, pos))
    }

    fn next_id(&mut self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.issued_ids.insert(id.clone()) {
                return id;
            }
        }
    }

    fn emit(&self, event: BoardEvent) {
        // No subscribers is fine.
        let _ = self.tx.send(event);
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_store() -> BoardStore {
        let palette = Palette::default();
        BoardStore::with_board(Board::demo(&palette), palette).unwrap()
    }

    fn card_ids(store: &BoardStore, column_id: &str) -> Vec<String> {
        store
            .column(column_id)
            .unwrap()
            .cards
            .iter()
            .map(|c| c.id.clone())
            .collect()
    }

    #[test]
    fn test_move_to_other_column_appends() {
        let mut store = demo_store();
        let done_before = card_ids(&store, "done");

        let outcome = store.move_card("c1", "todo", "done");

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(card_ids(&store, "todo"), vec!["c2"]);
        let mut expected = done_before;
        expected.push("c1".to_string());
        assert_eq!(card_ids(&store, "done"), expected);
        assert_eq!(store.card("done", "c1").unwrap().title, "Design system audit");
    }

    #[test]
    fn test_add_card_appends_with_fresh_id() {
        let mut store = demo_store();
        let card = store
            .add_card("todo", CardFields::new("Write tests"))
            .unwrap()
            .unwrap();

        let todo = store.column("todo").unwrap();
        assert_eq!(todo.len(), 3);
        assert_eq!(todo.cards.last().unwrap(), &card);
        assert_eq!(card.title, "Write tests");
        assert!(store.board().ids().filter(|id| *id == card.id).count() == 1);
    }

    #[test]
    fn test_blank_title_rejected_without_change() {
        let mut store = demo_store();
        let before = store.snapshot();

        let err = store.add_card("todo", CardFields::new("   ")).unwrap_err();
        assert!(err.is_validation());
        let err = store
            .edit_card("todo", "c1", CardFields::new("\t"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.add_column("  ").unwrap_err().is_validation());

        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_add_column_cycles_palette() {
        let mut store = demo_store();
        let column = store.add_column(" Blocked ").unwrap();

        assert_eq!(store.board().columns.len(), 5);
        assert_eq!(column.title, "Blocked");
        assert_eq!(column.color, COLUMN_COLORS[4 % COLUMN_COLORS.len()]);
        assert!(column.cards.is_empty());
        assert_eq!(store.board().columns.last().unwrap(), &column);

        store.add_column("Icebox").unwrap();
        let wrapped = store.add_column("Archive").unwrap();
        assert_eq!(wrapped.color, COLUMN_COLORS[0]);
    }

    #[test]
    fn test_edit_keeps_id_and_position() {
        let mut store = demo_store();
        let fields = CardFields::new("Landing page copy v2")
            .with_desc("Approved")
            .with_tag("Content", "#F5EEF8");

        let outcome = store.edit_card("review", "c4", fields).unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(card_ids(&store, "review"), vec!["c4"]);
        let card = store.card("review", "c4").unwrap();
        assert_eq!(card.title, "Landing page copy v2");
        assert_eq!(card.desc, "Approved");
        assert_eq!(card.tag, "Content");
        assert_eq!(card.tag_color, "#F5EEF8");

    }

    #[test]
    fn test_resaving_unchanged_fields_is_noop() {
        let mut store = demo_store();
        let before = store.snapshot();
        let mut rx = store.subscribe();

        // Reopening the form and saving without changes.
        let prefilled = store.card("review", "c4").unwrap().fields();
        let outcome = store.edit_card("review", "c4", prefilled.clone()).unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(rx.try_recv().is_err());
        assert_eq!(store.board(), &before);

        // Whitespace around unchanged values trims back to the same card.
        let padded = CardFields {
            title: format!("  {} ", prefilled.title),
            ..prefilled
        };
        assert_eq!(store.edit_card("review", "c4", padded).unwrap(), Outcome::Unchanged);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_edit_only_touches_one_card() {
        let mut store = demo_store();
        let before = store.snapshot();
        store
            .edit_card("done", "c6", CardFields::new("Schema v2"))
            .unwrap();

        let after = store.board();
        for (old, new) in before.columns.iter().zip(&after.columns) {
            for (a, b) in old.cards.iter().zip(&new.cards) {
                if a.id != "c6" {
                    assert_eq!(a, b);
                }
            }
        }
        let edited = store.card("done", "c6").unwrap();
        assert_eq!(edited.desc, "");
        assert_eq!(edited.tag, "");
    }

    #[test]
    fn test_edit_wrong_column_is_noop() {
        let mut store = demo_store();
        let before = store.snapshot();
        let outcome = store
            .edit_card("todo", "c4", CardFields::new("Elsewhere"))
            .unwrap();
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_delete_preserves_order_and_is_idempotent() {
        let mut store = demo_store();
        let extra = store
            .add_card("todo", CardFields::new("Third"))
            .unwrap()
            .unwrap();

        assert_eq!(store.delete_card("todo", "c2"), Outcome::Applied);
        let once = store.snapshot();
        assert_eq!(card_ids(&store, "todo"), vec!["c1".to_string(), extra.id]);

        assert_eq!(store.delete_card("todo", "c2"), Outcome::Unchanged);
        assert_eq!(store.board(), &once);
        assert!(store.board().find_card("c2").is_none());
    }

    #[test]
    fn test_same_column_move_is_noop() {
        let mut store = demo_store();
        let before = store.snapshot();
        assert_eq!(store.move_card("c1", "todo", "todo"), Outcome::Unchanged);
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_stale_moves_are_noops() {
        let mut store = demo_store();
        let before = store.snapshot();

        assert_eq!(store.move_card("c3", "todo", "done"), Outcome::Unchanged);
        assert_eq!(store.move_card("c1", "todo", "missing"), Outcome::Unchanged);
        assert_eq!(store.move_card("zz", "todo", "done"), Outcome::Unchanged);
        assert_eq!(store.board(), &before);

        store.move_card("c1", "todo", "done");
        // A duplicate drop signal for the same gesture.
        assert_eq!(store.move_card("c1", "todo", "done"), Outcome::Unchanged);
        assert_eq!(store.board().card_count(), before.card_count());
    }

    #[test]
    fn test_add_card_unknown_column_is_noop() {
        let mut store = demo_store();
        let before = store.snapshot();
        assert!(store
            .add_card("nowhere", CardFields::new("Lost"))
            .unwrap()
            .is_none());
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn test_invariants_hold_over_operation_sequence() {
        let mut store = demo_store();
        let mut generated = HashSet::new();

        for i in 0..6 {
            let column = store.add_column(&format!("Lane {i}")).unwrap();
            assert!(generated.insert(column.id.clone()));
            let card = store
                .add_card(&column.id, CardFields::new(format!("Card {i}")))
                .unwrap()
                .unwrap();
            assert!(generated.insert(card.id.clone()));
            store.move_card(&card.id, &column.id, "todo");
            store.move_card("c1", "todo", &column.id);
            store.move_card("c1", &column.id, "todo");
            if i % 2 == 0 {
                store.delete_card("todo", &card.id);
            }
            store.board().check_invariants().unwrap();
        }

        assert_eq!(store.board().card_count(), 6 + 3);
        assert_eq!(store.board().ids().count(), 10 + 9);
    }

    #[test]
    fn test_deleted_ids_are_never_reissued() {
        let mut store = BoardStore::default();
        let column = store.add_column("Only").unwrap();
        let card = store
            .add_card(&column.id, CardFields::new("Short lived"))
            .unwrap()
            .unwrap();
        store.delete_card(&column.id, &card.id);
        assert!(store.issued_ids.contains(&card.id));
        assert_eq!(store.issued_ids.len(), 2);
    }

    #[test]
    fn test_events_follow_applied_transitions() {
        let mut store = demo_store();
        let mut rx = store.subscribe();

        store.move_card("c1", "todo", "todo");
        store.delete_card("todo", "missing");
        assert!(rx.try_recv().is_err());

        store.move_card("c1", "todo", "done");
        assert_eq!(
            rx.try_recv().unwrap(),
            BoardEvent::CardMoved {
                card_id: "c1".into(),
                from_column_id: "todo".into(),
                to_column_id: "done".into(),
            }
        );

        let column = store.add_column("Blocked").unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            BoardEvent::ColumnAdded { column_id: column.id }
        );
    }

    #[test]
    fn test_strict_lookups() {
        let store = demo_store();
        assert!(matches!(
            store.column("nope"),
            Err(KanbanError::ColumnNotFound(_))
        ));
        assert!(matches!(
            store.card("todo", "c4"),
            Err(KanbanError::CardNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_seed_rejected() {
        let palette = Palette::default();
        let mut board = Board::demo(&palette);
        board.columns[1].id = "todo".to_string();
        assert!(matches!(
            BoardStore::with_board(board, palette),
            Err(KanbanError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_from_config_empty_seed() {
        let config = KanbanConfig {
            seed: Seed::Empty,
            ..KanbanConfig::default()
        };
        let store = BoardStore::from_config(&config).unwrap();
        assert!(store.board().columns.is_empty());
    }
}
