//! Fixed color palettes for column accents and card tags.

use serde::{Deserialize, Serialize};

use crate::error::{KanbanError, KanbanResult};

/// Column accent colors, assigned round-robin by creation order.
pub const COLUMN_COLORS: &[&str] = &[
    "#3498DB", // blue
    "#F39C12", // orange
    "#9B59B6", // purple
    "#27AE60", // green
    "#E74C3C", // red
    "#1ABC9C", // teal
];

/// Selectable tag colors as (background, text) pairs.
pub const TAG_COLORS: &[(&str, &str)] = &[
    ("#EBF5FB", "#2E86C1"),
    ("#E8F8F5", "#17A589"),
    ("#FEF9E7", "#B7950B"),
    ("#FDEDEC", "#CB4335"),
    ("#F5EEF8", "#8E44AD"),
    ("#F4F6F6", "#566573"),
];

/// A tag color choice. Cards store only the background token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagColor {
    pub background: String,
    pub text: String,
}

/// The palettes in effect for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    columns: Vec<String>,
    tags: Vec<TagColor>,
}

impl Palette {
    /// Build a palette, rejecting empty color lists.
    pub fn new(columns: Vec<String>, tags: Vec<TagColor>) -> KanbanResult<Self> {
        if columns.is_empty() {
            return Err(KanbanError::config("column palette must not be empty"));
        }
        if tags.is_empty() {
            return Err(KanbanError::config("tag palette must not be empty"));
        }
        Ok(Self { columns, tags })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn tags(&self) -> &[TagColor] {
        &self.tags
    }

    /// Accent color for the column created when `index` columns already exist.
    pub fn column_color(&self, index: usize) -> &str {
        &self.columns[index % self.columns.len()]
    }

    /// Look up the text color that goes with a stored tag background.
    pub fn tag_style(&self, background: &str) -> Option<&TagColor> {
        self.tags
            .iter()
            .find(|t| t.background.eq_ignore_ascii_case(background))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            columns: default_column_colors(),
            tags: default_tag_colors(),
        }
    }
}

pub(crate) fn default_column_colors() -> Vec<String> {
    COLUMN_COLORS.iter().map(|c| c.to_string()).collect()
}

pub(crate) fn default_tag_colors() -> Vec<TagColor> {
    TAG_COLORS
        .iter()
        .map(|(background, text)| TagColor {
            background: background.to_string(),
            text: text.to_string(),
        })
        .collect()
}
