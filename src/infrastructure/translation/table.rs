use anyhow::{anyhow, Result};
use log::{info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::model::item::ItemMeta;

/// Local item id -> localized name table, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    names: HashMap<u32, String>,
}

impl TranslationTable {
    /// Load a JSON object of `{ "<item id>": "<name>" }` from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read translation table '{}': {}", path.display(), e))?;

        let table = Self::from_json_str(&raw)
            .map_err(|e| anyhow!("Failed to parse translation table '{}': {}", path.display(), e))?;

        info!("Loaded {} translated item names from {}", table.len(), path.display());
        Ok(table)
    }

    /// Parse the table from JSON text. Entries with a non-numeric key or a
    /// non-string name are skipped.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let data: Value = serde_json::from_str(raw)?;
        let object = data
            .as_object()
            .ok_or_else(|| anyhow!("Translation table must be a JSON object"))?;

        let mut names = HashMap::with_capacity(object.len());
        let mut skipped = 0usize;

        for (key, value) in object {
            match (key.trim().parse::<u32>(), value.as_str()) {
                (Ok(id), Some(name)) if !name.is_empty() => {
                    names.insert(id, name.to_string());
                }
                _ => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!("Skipped {} malformed translation entries", skipped);
        }

        Ok(Self { names })
    }

    pub fn get(&self, item_id: u32) -> Option<&str> {
        self.names.get(&item_id).map(String::as_str)
    }

    /// Replace metadata names with local names where the table has one
    pub fn overlay(&self, items: &mut [ItemMeta]) {
        for item in items.iter_mut() {
            if let Some(name) = self.get(item.id) {
                item.name = name.to_string();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
