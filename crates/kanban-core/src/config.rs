//! Board configuration.
//!
//! Read from `kanban.toml` (or an explicit path), then overridden by
//! environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::board::palette::{default_column_colors, default_tag_colors, Palette, TagColor};
use crate::error::{KanbanError, KanbanResult};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kanban.toml";

/// Overrides the `seed` setting.
pub const SEED_ENV: &str = "KANBAN_SEED";

/// Which board a new store starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seed {
    #[default]
    Demo,
    Empty,
}

impl Seed {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Some(Self::Demo),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

/// Optional palette overrides; unset lists fall back to the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub columns: Option<Vec<String>>,
    pub tags: Option<Vec<TagColor>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    pub seed: Seed,
    pub palette: PaletteConfig,
}

impl KanbanConfig {
    /// Load configuration. An explicit `path` must exist; otherwise
    /// `kanban.toml` is used if present. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> KanbanResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> KanbanResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read board config");
            KanbanError::Io(e)
        })?;
        let config = Self::parse(&contents)
            .map_err(|e| KanbanError::config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded board config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> KanbanResult<Self> {
        toml::from_str(contents).map_err(|e| KanbanError::config(format!("failed to parse: {e}")))
    }

    /// Apply environment overrides through `lookup`, so callers and tests
    /// can supply their own source.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> KanbanResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(SEED_ENV) {
            self.seed = Seed::from_str(&value).ok_or_else(|| {
                KanbanError::config(format!(
                    "invalid {SEED_ENV} '{value}': expected 'demo' or 'empty'"
                ))
            })?;
        }
        Ok(())
    }

    /// The palette this configuration selects.
    pub fn palette(&self) -> KanbanResult<Palette> {
        let columns = self
            .palette
            .columns
            .clone()
            .unwrap_or_else(default_column_colors);
        let tags = self.palette.tags.clone().unwrap_or_else(default_tag_colors);
        Palette::new(columns, tags)
    }
}
