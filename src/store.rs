//! Custom stopword store.
//!
//! A [`StopwordStore`] is an ordered list of unique, lowercase words that
//! users add to the base English stopword dictionary. It may be backed by a
//! JSON file holding a plain array of strings. The store can be shared
//! between threads; a pipeline takes an immutable snapshot of it when it is
//! built.
//!
//! # Examples
//!
//! ```
//! use textscope::store::StopwordStore;
//!
//! let store = StopwordStore::new();
//! assert!(store.add("Lorem"));
//! assert!(!store.add("lorem "));
//! assert!(store.contains("LOREM"));
//! assert_eq!(store.snapshot(), vec!["lorem"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use parking_lot::RwLock;

use crate::analysis::stop::normalize_word;
use crate::error::{Result, TextScopeError};

/// Thread-safe, ordered set of custom stop words.
#[derive(Debug, Default)]
pub struct StopwordStore {
    words: RwLock<Vec<String>>,
    path: Option<PathBuf>,
}

impl StopwordStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a file-backed store. A missing file gives an empty store; the
    /// file is created on the first [`save`](Self::save).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let store = StopwordStore {
            words: RwLock::new(Vec::new()),
            path: Some(path.clone()),
        };

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let words: Vec<String> = if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            };
            for word in &words {
                store.add(word);
            }
            debug!("loaded {} custom stop words from {}", store.len(), path.display());
        }

        Ok(store)
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Add a word. Returns `false` for blank words and words already present.
    pub fn add(&self, word: &str) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };

        let mut words = self.words.write();
        if words.contains(&word) {
            return false;
        }
        words.push(word);
        true
    }

    /// Remove a word. Returns `false` when it was not present.
    pub fn remove(&self, word: &str) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };

        let mut words = self.words.write();
        match words.iter().position(|w| *w == word) {
            Some(index) => {
                words.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether a word is in the store, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        normalize_word(word).is_some_and(|word| self.words.read().contains(&word))
    }

    /// A copy of the current words, in insertion order.
    pub fn snapshot(&self) -> Vec<String> {
        self.words.read().clone()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.words.read().is_empty()
    }

    /// Write the words to the backing file as a JSON array.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            TextScopeError::InvalidOperation("stopword store has no backing file".to_string())
        })?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let words = self.snapshot();
        fs::write(path, serde_json::to_string_pretty(&words)?)?;
        info!("saved {} custom stop words to {}", words.len(), path.display());
        Ok(())
    }
}
