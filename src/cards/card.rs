//! Word cards.

use serde::{Deserialize, Serialize};

/// A word card. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The word or phrase to perform.
    pub word: String,
    /// Label of the theme the card was drawn from.
    pub theme_label: String,
}

impl Card {
    pub fn new(word: impl Into<String>, theme_label: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            theme_label: theme_label.into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.word, self.theme_label)
    }
}
