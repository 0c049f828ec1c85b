//! Board domain models for the Kanban widget.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::palette::Palette;
use crate::error::{KanbanError, KanbanResult};

/// A card within a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub tag_color: String,
}

impl Card {
    pub(crate) fn new(id: String, fields: CardFields) -> Self {
        Self {
            id,
            title: fields.title,
            desc: fields.desc,
            tag: fields.tag,
            tag_color: fields.tag_color,
        }
    }

    /// Replace every editable field. The id is left alone.
    pub(crate) fn apply(&mut self, fields: CardFields) {
        self.title = fields.title;
        self.desc = fields.desc;
        self.tag = fields.tag;
        self.tag_color = fields.tag_color;
    }

    /// The editable fields of this card, as a form would be prefilled.
    pub fn fields(&self) -> CardFields {
        CardFields {
            title: self.title.clone(),
            desc: self.desc.clone(),
            tag: self.tag.clone(),
            tag_color: self.tag_color.clone(),
        }
    }
}

/// Editable card fields submitted by the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFields {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub tag_color: String,
}

impl CardFields {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>, tag_color: impl Into<String>) -> Self {
        self.tag = tag.into();
        self.tag_color = tag_color.into();
        self
    }

    /// Copy of these fields with surrounding whitespace removed.
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            desc: self.desc.trim().to_string(),
            tag: self.tag.trim().to_string(),
            tag_color: self.tag_color.trim().to_string(),
        }
    }

    /// A card needs a title once whitespace is stripped.
    pub fn validate(&self) -> KanbanResult<()> {
        validate_title(&self.title, "card")
    }
}

/// A column within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub title: String,
    pub color: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a card within this column.
    pub fn position(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// A Kanban board: columns in display order, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Find a card anywhere on the board, with the column that holds it.
    pub fn find_card(&self, card_id: &str) -> Option<(&Column, &Card)> {
        self.columns
            .iter()
            .find_map(|col| col.card(card_id).map(|card| (col, card)))
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Every column and card id on the board.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().flat_map(|col| {
            std::iter::once(col.id.as_str()).chain(col.cards.iter().map(|c| c.id.as_str()))
        })
    }

    /// Check the structural invariants: ids are unique across columns and
    /// cards (so each card sits in exactly one column) and no title is empty.
    pub fn check_invariants(&self) -> KanbanResult<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.title.trim().is_empty() {
                return Err(KanbanError::InvalidBoard(format!(
                    "column '{}' has an empty title",
                    column.id
                )));
            }
            if !seen.insert(column.id.as_str()) {
                return Err(KanbanError::InvalidBoard(format!(
                    "duplicate id '{}'",
                    column.id
                )));
            }
            for card in &column.cards {
                if card.title.trim().is_empty() {
                    return Err(KanbanError::InvalidBoard(format!(
                        "card '{}' has an empty title",
                        card.id
                    )));
                }
                if !seen.insert(card.id.as_str()) {
                    return Err(KanbanError::InvalidBoard(format!(
                        "duplicate id '{}'",
                        card.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// The board the widget starts with: four columns and a few sample cards.
    pub fn demo(palette: &Palette) -> Self {
        let columns = DEMO_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, (id, title, cards))| Column {
                id: id.to_string(),
                title: title.to_string(),
                color: palette.column_color(i).to_string(),
                cards: cards
                    .iter()
                    .map(|(card_id, title, desc, tag, tag_color)| Card {
                        id: card_id.to_string(),
                        title: title.to_string(),
                        desc: desc.to_string(),
                        tag: tag.to_string(),
                        tag_color: tag_color.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }
}

type DemoCard = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// Demo columns: (id, title, [(card id, title, desc, tag, tag color)]).
const DEMO_COLUMNS: &[(&str, &str, &[DemoCard])] = &[
    (
        "todo",
        "To Do",
        &[
            ("c1", "Design system audit", "Review existing components for consistency", "Design", "#EBF5FB"),
            ("c2", "API rate limiting", "Add throttling to public endpoints", "Backend", "#FDEDEC"),
        ],
    ),
    (
        "progress",
        "In Progress",
        &[("c3", "User onboarding flow", "Three-step welcome wizard", "Frontend", "#E8F8F5")],
    ),
    (
        "review",
        "Review",
        &[("c4", "Landing page copy", "Hero section and feature blurbs", "Content", "#F5EEF8")],
    ),
    (
        "done",
        "Done",
        &[
            ("c5", "Set up CI pipeline", "", "DevOps", "#FEF9E7"),
            ("c6", "Database schema", "Initial migrations", "Backend", "#FDEDEC"),
        ],
    ),
];

pub(crate) fn validate_title(title: &str, what: &str) -> KanbanResult<()> {
    if title.trim().is_empty() {
        return Err(KanbanError::validation(format!("{what} title must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_board_is_valid() {
        let board = Board::demo(&Palette::default());
        board.check_invariants().unwrap();
        assert_eq!(board.columns.len(), 4);
        assert_eq!(board.card_count(), 6);
        assert_eq!(board.columns[2].color, "#9B59B6");
    }

    #[test]
    fn test_find_card() {
        let board = Board::demo(&Palette::default());
        let (column, card) = board.find_card("c4").unwrap();
        assert_eq!(column.id, "review");
        assert_eq!(card.tag, "Content");
        assert!(board.find_card("nope").is_none());
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let mut board = Board::demo(&Palette::default());
        let dup = board.columns[0].cards[0].clone();
        board.columns[3].cards.push(dup);
        assert!(matches!(
            board.check_invariants(),
            Err(KanbanError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut board = Board::demo(&Palette::default());
        board.columns[1].cards[0].title = "  ".to_string();
        assert!(board.check_invariants().is_err());
    }

    #[test]
    fn test_fields_trimmed_and_validated() {
        let fields = CardFields::new("  Write tests ").with_tag(" QA ", " #F4F6F6");
        let trimmed = fields.trimmed();
        assert_eq!(trimmed.title, "Write tests");
        assert_eq!(trimmed.tag, "QA");
        assert_eq!(trimmed.tag_color, "#F4F6F6");
        assert!(trimmed.validate().is_ok());
        assert!(CardFields::new("   ").validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_card_serializes_camel_case() {
        let card = Card::new("c9".into(), CardFields::new("Ship it").with_tag("Ops", "#FEF9E7"));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["tagColor"], "#FEF9E7");
        assert_eq!(json["desc"], "");
    }
}
