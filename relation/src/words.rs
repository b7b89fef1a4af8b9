//! [`WordSet`]: ordered, duplicate-free collection of user-entered words.

use serde::{Deserialize, Serialize};

/// Words collected from the user, in entry order.
///
/// Uniqueness is exact and case-sensitive: `"Dog"` and `"dog"` are different words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `text` on commas, trims each token and appends the tokens that are
    /// non-empty and not yet present. Returns the words actually added, in order.
    pub fn add_comma_separated(&mut self, text: &str) -> Vec<String> {
        let mut added = Vec::new();
        for token in text.split(',').map(str::trim) {
            if token.is_empty() || self.contains(token) {
                continue;
            }
            self.words.push(token.to_string());
            added.push(token.to_string());
        }
        added
    }

    /// Removes `word` if present. The remaining words keep their relative order.
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        self.words.len() != before
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.words.clone()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
