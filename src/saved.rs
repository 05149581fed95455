//! Session list of bookmarked words.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::render::View;

/// Append-only list of saved words, in the order they were saved.
///
/// Saving a word twice is a no-op. Nothing is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SavedWords {
    words: Vec<String>,
}

impl SavedWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves `word`; returns `false` when it was already saved.
    pub fn save(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.contains(&word) {
            debug!(word = %word, "already saved");
            return false;
        }
        debug!(word = %word, total = self.words.len() + 1, "saved word");
        self.words.push(word);
        true
    }

    /// Saves the `requested` words that `view` lists, in request order.
    ///
    /// Only words offered by the view can be saved; the others are skipped and
    /// returned.
    pub fn save_from<I, W>(&mut self, view: &View, requested: I) -> Vec<String>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut skipped = Vec::new();
        for word in requested {
            let word = word.as_ref();
            if view.contains_word(word) {
                self.save(word);
            } else {
                warn!(word = %word, "not in the results, skipping");
                skipped.push(word.to_string());
            }
        }
        skipped
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|saved| saved == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The saved words joined with `", "`.
    pub fn render(&self) -> String {
        self.words.join(", ")
    }
}

impl fmt::Display for SavedWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
