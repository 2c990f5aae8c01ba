//! Session phases.

use serde::{Deserialize, Serialize};

use crate::schedule::TurnStart;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Free-for-all: waiting for the performer to reveal a card.
    Ready,
    /// Team modes: "whose turn" screen before the clock starts.
    Handoff,
    /// A card is shown and being performed.
    Playing,
    /// Free-for-all: waiting for the group to confirm who guessed.
    AwaitingGuess,
    /// Hot seat: the next teammate is stepping in; the clock keeps running.
    CardHandoff,
    /// Team modes: cooldown after a skip; the clock keeps running.
    Penalty,
    /// Final results.
    GameOver,
}

impl Phase {
    /// Phase a turn opens in.
    #[must_use]
    pub fn opening(start: TurnStart) -> Self {
        match start {
            TurnStart::ShowCard => Phase::Ready,
            TurnStart::Handoff => Phase::Handoff,
        }
    }

    /// Phases during which the turn clock may be running and expire.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(self, Phase::Playing | Phase::CardHandoff | Phase::Penalty)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Ready => "ready",
            Phase::Handoff => "handoff",
            Phase::Playing => "playing",
            Phase::AwaitingGuess => "awaiting-guess",
            Phase::CardHandoff => "card-handoff",
            Phase::Penalty => "penalty",
            Phase::GameOver => "gameover",
        };
        f.write_str(name)
    }
}
