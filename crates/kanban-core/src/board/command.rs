//! Serializable board commands.
//!
//! Lets a caller describe a gesture as data (for example a script of user
//! actions) and replay it against a [`BoardStore`].

use serde::{Deserialize, Serialize};

use super::{BoardStore, CardFields, Outcome};
use crate::error::KanbanResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BoardCommand {
    AddCard {
        column_id: String,
        fields: CardFields,
    },
    EditCard {
        column_id: String,
        card_id: String,
        fields: CardFields,
    },
    DeleteCard {
        column_id: String,
        card_id: String,
    },
    MoveCard {
        card_id: String,
        from_column_id: String,
        to_column_id: String,
    },
    AddColumn {
        title: String,
    },
    BeginDrag {
        card_id: String,
        from_column_id: String,
    },
    CompleteDrop {
        to_column_id: String,
    },
    EndDrag,
}

impl BoardCommand {
    /// Parse a JSON array of commands.
    pub fn parse_script(json: &str) -> KanbanResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddCard { .. } => "addCard",
            Self::EditCard { .. } => "editCard",
            Self::DeleteCard { .. } => "deleteCard",
            Self::MoveCard { .. } => "moveCard",
            Self::AddColumn { .. } => "addColumn",
            Self::BeginDrag { .. } => "beginDrag",
            Self::CompleteDrop { .. } => "completeDrop",
            Self::EndDrag => "endDrag",
        }
    }
}

impl BoardStore {
    /// Run one command. Drag bookkeeping never changes the board by itself,
    /// so `beginDrag` and `endDrag` report [`Outcome::Unchanged`].
    pub fn dispatch(&mut self, command: BoardCommand) -> KanbanResult<Outcome> {
        let outcome = match command {
            BoardCommand::AddCard { column_id, fields } => match self.add_card(&column_id, fields)? {
                Some(_) => Outcome::Applied,
                None => Outcome::Unchanged,
            },
            BoardCommand::EditCard {
                column_id,
                card_id,
                fields,
            } => self.edit_card(&column_id, &card_id, fields)?,
            BoardCommand::DeleteCard { column_id, card_id } => {
                self.delete_card(&column_id, &card_id)
            }
            BoardCommand::MoveCard {
                card_id,
                from_column_id,
                to_column_id,
            } => self.move_card(&card_id, &from_column_id, &to_column_id),
            BoardCommand::AddColumn { title } => {
                self.add_column(&title)?;
                Outcome::Applied
            }
            BoardCommand::BeginDrag {
                card_id,
                from_column_id,
            } => {
                self.begin_drag(&card_id, &from_column_id);
                Outcome::Unchanged
            }
            BoardCommand::CompleteDrop { to_column_id } => self.complete_drop(&to_column_id),
            BoardCommand::EndDrag => {
                self.end_drag();
                Outcome::Unchanged
            }
        };
        Ok(outcome)
    }
}
