use std::collections::HashMap;

use crate::config::KeyOrder;

/// A single `key=value` pair from a translation properties file.
///
/// Both fields hold the unescaped text: `greeting!=Hi {0}` becomes
/// key `greeting!` with raw value `Hi {0}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Dot-segmented translation key (e.g., `"login.button.submit"`).
    pub key: String,
    /// Message template, possibly containing `{0}`, `{1}`, ... placeholders.
    pub raw_value: String,
    /// Line number (1-indexed) where the key was first declared.
    pub line: usize,
}

impl TranslationEntry {
    pub fn new(key: impl Into<String>, raw_value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
            line,
        }
    }
}

/// All entries of one properties file, in first-seen key order.
///
/// Re-declaring a key replaces its value but keeps the position of the
/// first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationFile {
    entries: Vec<TranslationEntry>,
    index: HashMap<String, usize>,
}

impl TranslationFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: TranslationEntry) {
        match self.index.get(&entry.key) {
            Some(&pos) => self.entries[pos].raw_value = entry.raw_value,
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn entries(&self) -> &[TranslationEntry] {
        &self.entries
    }

    /// Entries in the requested iteration order.
    pub fn ordered(&self, order: KeyOrder) -> Vec<&TranslationEntry> {
        let mut entries: Vec<&TranslationEntry> = self.entries.iter().collect();
        if order == KeyOrder::Sorted {
            entries.sort_by(|a, b| a.key.cmp(&b.key));
        }
        entries
    }
}
