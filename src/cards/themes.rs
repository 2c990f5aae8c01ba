//! Theme catalog and card-pool building.
//!
//! A theme either carries its own words or groups subcategories. Selecting a
//! grouping theme on its own pulls in every subcategory; selecting specific
//! subcategories narrows it to just those.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::Card;

/// A named word list, optionally split into subcategories.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub label: String,
    pub words: Vec<String>,
    pub subcategories: Vec<Theme>,
}

impl Theme {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            words: Vec::new(),
            subcategories: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_subcategory(mut self, sub: Theme) -> Self {
        self.subcategories.push(sub);
        self
    }
}

/// Read-only catalog of themes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Every selectable id, themes and subcategories alike.
    pub fn all_ids(&self) -> Vec<&str> {
        self.themes
            .iter()
            .flat_map(|t| {
                std::iter::once(t.id.as_str()).chain(t.subcategories.iter().map(|s| s.id.as_str()))
            })
            .collect()
    }

    /// Build the card pool for a selection of theme ids.
    ///
    /// Words are deduplicated across themes; the first theme (in catalog
    /// order) to contribute a word labels its card.
    pub fn build_pool(&self, selected: &FxHashSet<String>) -> Result<Vec<Card>, ConfigError> {
        fn take<'a>(theme: &'a Theme, seen: &mut FxHashSet<&'a str>, pool: &mut Vec<Card>) {
            for word in &theme.words {
                if seen.insert(word.as_str()) {
                    pool.push(Card::new(word.clone(), theme.label.clone()));
                }
            }
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut pool = Vec::new();

        for theme in &self.themes {
            if theme.subcategories.is_empty() {
                if selected.contains(&theme.id) {
                    take(theme, &mut seen, &mut pool);
                }
                continue;
            }

            let any_sub = theme.subcategories.iter().any(|s| selected.contains(&s.id));
            if selected.contains(&theme.id) {
                take(theme, &mut seen, &mut pool);
            }
            for sub in &theme.subcategories {
                if selected.contains(&sub.id) || (selected.contains(&theme.id) && !any_sub) {
                    take(sub, &mut seen, &mut pool);
                }
            }
        }

        if pool.is_empty() {
            return Err(ConfigError::EmptyCardPool);
        }
        Ok(pool)
    }

    /// A small catalog that ships with the engine.
    pub fn builtin() -> Self {
        Self::new()
            .with_theme(Theme::new("general", "Mixed").with_words([
                "Umbrella", "Birthday party", "Lighthouse", "Sneeze", "Magician", "Traffic jam",
                "Snowman", "Selfie",
            ]))
            .with_theme(Theme::new("movies", "Movies").with_words([
                "Titanic", "Jaws", "The Lion King", "Star Wars", "Frozen", "Jurassic Park",
            ]))
            .with_theme(Theme::new("jobs", "Jobs").with_words([
                "Firefighter", "Dentist", "Pilot", "Chef", "Hairdresser", "Astronaut",
            ]))
            .with_theme(Theme::new("food", "Food").with_words([
                "Spaghetti", "Pancakes", "Taco", "Popcorn", "Sushi", "Ice cream",
            ]))
            .with_theme(Theme::new("sports", "Sports").with_words([
                "Tennis", "Skiing", "Bowling", "Surfing", "Boxing", "Golf",
            ]))
            .with_theme(
                Theme::new("kids", "Kids")
                    .with_subcategory(
                        Theme::new("kidsAnimals", "Animals")
                            .with_words(["Elephant", "Penguin", "Monkey", "Snake", "Frog"]),
                    )
                    .with_subcategory(
                        Theme::new("kidsFood", "Kids food")
                            .with_words(["Banana", "Strawberry", "Popcorn", "Carrot"]),
                    )
                    .with_subcategory(
                        Theme::new("kidsSports", "Kids sports")
                            .with_words(["Football", "Swimming", "Jump rope", "Cycling"]),
                    )
                    .with_subcategory(
                        Theme::new("kidsHome", "Things at home")
                            .with_words(["Toothbrush", "Vacuum cleaner", "Bed", "Lamp"]),
                    ),
            )
    }
}
