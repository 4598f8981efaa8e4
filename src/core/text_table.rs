/// Localized text tables — numbered pools of lines, one picked at random
/// per lookup. Backs `%oth` oath selection in the standalone crate; a game
/// embedding the engine will usually supply its own `TextSource` instead.
use rand::seq::SliceRandom;
use rand::RngCore;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::context::TextSource;

#[derive(Debug, Error)]
pub enum TextTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A set of text tables keyed by integer id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextTable {
    pub entries: FxHashMap<u32, Vec<String>>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from a RON file holding a map of id to line list.
    pub fn load_from_ron(path: &Path) -> Result<TextTable, TextTableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse tables from a RON string.
    pub fn parse_ron(input: &str) -> Result<TextTable, TextTableError> {
        let entries: FxHashMap<u32, Vec<String>> = ron::from_str(input)?;
        Ok(TextTable { entries })
    }

    pub fn insert(&mut self, id: u32, lines: Vec<String>) {
        self.entries.insert(id, lines);
    }

    /// Merge another table set into this one. Tables from `other` override
    /// tables in `self` with the same id.
    pub fn merge(&mut self, other: TextTable) {
        for (id, lines) in other.entries {
            self.entries.insert(id, lines);
        }
    }
}

impl TextSource for TextTable {
    fn random_text(&self, id: u32, rng: &mut dyn RngCore) -> Option<String> {
        let lines = self.entries.get(&id)?;
        lines.choose(rng).cloned()
    }
}
