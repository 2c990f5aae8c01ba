//! The card deck dealt during a session.

use tracing::debug;

use crate::core::GameRng;
use crate::error::ConfigError;

use super::{Card, FairShuffle};

/// Fair-shuffle deck over the session's card pool.
///
/// Owns its RNG stream so that dealing is independent of turn rotation.
#[derive(Clone, Debug)]
pub struct CardDeck {
    cards: FairShuffle<Card>,
    rng: GameRng,
}

impl CardDeck {
    /// Build a deck. An empty pool is a configuration error.
    pub fn new(pool: Vec<Card>, mut rng: GameRng) -> Result<Self, ConfigError> {
        let cards = FairShuffle::new(pool, &mut rng).ok_or(ConfigError::EmptyCardPool)?;
        Ok(Self { cards, rng })
    }

    /// Deal the next card.
    ///
    /// Never repeats a card within a cycle; reshuffles when the cycle ends.
    pub fn next_card(&mut self) -> Card {
        let cycle = self.cards.cycle();
        let card = self.cards.next(&mut self.rng);
        if self.cards.cycle() != cycle {
            debug!(cycle = self.cards.cycle(), pool = self.cards.pool_size(), "deck reshuffled");
        }
        card
    }

    /// Number of distinct cards in the pool.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.cards.pool_size()
    }

    /// Cards left before the deck reshuffles.
    #[must_use]
    pub fn remaining_in_cycle(&self) -> usize {
        self.cards.remaining_in_cycle()
    }

    /// Current cycle number, starting at 1.
    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cards.cycle()
    }
}
