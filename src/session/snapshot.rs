//! Read-only views handed to the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameMode;
use crate::schedule::Actor;
use crate::scoring::{GameResult, Scoreboard};

use super::{Guess, Phase};

/// Who is on turn, by display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorView {
    /// Scoreboard index of the entity on turn (player or team).
    pub index: usize,
    /// Scoreboard name of that entity.
    pub name: String,
    /// Person performing. Same as `name` in free-for-all.
    pub performer: String,
}

impl ActorView {
    pub(crate) fn new(actor: Actor, board: &Scoreboard) -> Self {
        let (index, performer) = match actor {
            Actor::Player(id) => (id.index(), None),
            Actor::Team { team, performer } => (team.index(), Some(performer)),
        };
        let name = board.name(index).unwrap_or_default().to_string();
        Self {
            index,
            performer: performer.unwrap_or_else(|| name.clone()),
            name,
        }
    }
}

/// State of the turn clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    pub enabled: bool,
    pub running: bool,
    pub remaining: u32,
    pub duration: u32,
    /// Remaining time is in the emphasised range.
    pub low: bool,
}

/// Everything needed to draw one frame of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub phase: Phase,
    pub round: u32,
    pub rounds_total: u32,
    pub actor: ActorView,
    pub card: Option<Card>,
    pub timer: TimerView,
    /// Seconds left of a skip penalty, while one is running.
    pub penalty_remaining: Option<u32>,
    pub scoreboard: Scoreboard,
    /// Scoreboard indices, best first.
    pub standings: Vec<usize>,
    /// Current selection while waiting for the guess to be confirmed.
    pub pending_guess: Option<Guess>,
    /// Hot seat: teammate about to take over.
    pub next_performer: Option<String>,
    /// Cards left before the deck reshuffles.
    pub cards_left_in_cycle: usize,
    pub result: Option<GameResult>,
}
