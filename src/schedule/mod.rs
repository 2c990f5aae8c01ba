//! Turn rotation.
//!
//! Each game mode rotates turns differently. Instead of the session asking
//! "which mode am I in?" at every step, the scheduler answers with
//! directives: what a correct guess leads to, whether skipping is allowed,
//! what timer expiry means, and who acts next.
//!
//! ## Strategies
//!
//! - [`FreeForAll`]: round-robin over players; the round counter moves on
//!   wraparound.
//! - [`TeamStandard`]: per round, one interleaved list with a fair share of
//!   performers per team; the timer ending is the turn ending.
//! - [`HotSeat`]: round-robin over teams; inside a team's turn, a
//!   fair-shuffle queue hands the hot seat to the next teammate after every
//!   correct guess or skip while one shared timer keeps running.
//!
//! [`TurnScheduler`] is the tagged variant over the three, chosen once from
//! the configured mode.

mod free_for_all;
mod hot_seat;
mod team_standard;

pub use free_for_all::FreeForAll;
pub use hot_seat::{HotSeat, HotSeatQueue};
pub use team_standard::{TeamStandard, TurnOrderEntry};

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, GameRng, PlayerId, Roster, TeamId};
use crate::error::ConfigError;
use crate::scoring::Outcome;

/// Who is acting right now.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// Free-for-all performer.
    Player(PlayerId),
    /// Team on turn and the teammate currently performing.
    Team { team: TeamId, performer: String },
}

/// Result of closing a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advance {
    /// Next actor within the same round.
    NextTurn,
    /// A new round started; carries the new round number.
    NewRound(u32),
    /// The last round is over.
    Finished,
}

/// How a turn opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStart {
    /// The performer reveals the card directly.
    ShowCard,
    /// A "whose turn" screen comes first.
    Handoff,
}

/// What happens when the performer reports a correct guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AfterCorrect {
    /// Freeze and ask who guessed before scoring.
    AwaitGuess,
    /// Score now and deal the next card to the same performer.
    NextCard,
    /// Score now and hand the seat to `next`, clock still running.
    SwapPerformer { next: String },
}

/// A correct guess: the points to award now (if any) and the follow-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectFollowUp {
    pub award: Option<Outcome>,
    pub next: AfterCorrect,
}

/// Where a skip penalty leads once it has elapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyExit {
    /// Same performer, next card.
    NextCard,
    /// Hand the seat to `next` first.
    SwapPerformer { next: String },
}

/// What timer expiry means for the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AfterExpiry {
    /// Ask who guessed; nobody is assumed correct.
    AwaitGuess,
    /// The turn is over; rotate.
    EndTurn,
}

/// Behaviour shared by every rotation strategy.
pub trait Rotation {
    /// Who is acting now.
    fn actor(&self) -> Actor;

    /// Close the current turn and move on.
    fn advance(&mut self) -> Advance;

    /// Current round, starting at 1.
    fn round(&self) -> u32;

    /// Configured number of rounds.
    fn rounds_total(&self) -> u32;

    /// How each turn opens.
    fn turn_start(&self) -> TurnStart;

    /// Reaction to a correct guess during play.
    fn on_correct(&mut self) -> CorrectFollowUp;

    /// Reaction to a skipped card. `None` when this mode has no skip.
    fn on_skip(&mut self) -> Option<PenaltyExit>;

    /// Reaction to the timer running out during play.
    fn on_expiry(&self) -> AfterExpiry;

    /// Whether a turn can be closed by hand ("next player").
    fn allows_manual_advance(&self) -> bool;

    /// Commit a queued performer swap. No-op where swaps do not exist.
    fn commit_swap(&mut self);

    /// Performer queued to take the seat, if a swap is pending.
    fn pending_performer(&self) -> Option<&str>;

    /// Start over from round 1 with the same roster.
    fn reset(&mut self);
}

/// The scheduler for a session: one strategy per game mode.
#[derive(Clone, Debug)]
pub enum TurnScheduler {
    FreeForAll(FreeForAll),
    TeamStandard(TeamStandard),
    HotSeat(HotSeat),
}

impl TurnScheduler {
    /// Pick the strategy for `mode` over `roster`.
    pub fn new(
        mode: GameMode,
        roster: &Roster,
        rounds_total: u32,
        rng: GameRng,
    ) -> Result<Self, ConfigError> {
        match (mode, roster) {
            (GameMode::FreeForAll, Roster::Players(names)) => Ok(TurnScheduler::FreeForAll(
                FreeForAll::new(names.len(), rounds_total),
            )),
            (GameMode::TeamStandard, Roster::Teams(teams)) => Ok(TurnScheduler::TeamStandard(
                TeamStandard::new(teams.clone(), rounds_total, rng)?,
            )),
            (GameMode::HotSeat, Roster::Teams(teams)) => Ok(TurnScheduler::HotSeat(HotSeat::new(
                teams.clone(),
                rounds_total,
                rng,
            )?)),
            _ => Err(ConfigError::RosterMismatch),
        }
    }

    fn rotation(&self) -> &dyn Rotation {
        match self {
            TurnScheduler::FreeForAll(s) => s,
            TurnScheduler::TeamStandard(s) => s,
            TurnScheduler::HotSeat(s) => s,
        }
    }

    fn rotation_mut(&mut self) -> &mut dyn Rotation {
        match self {
            TurnScheduler::FreeForAll(s) => s,
            TurnScheduler::TeamStandard(s) => s,
            TurnScheduler::HotSeat(s) => s,
        }
    }
}

impl Rotation for TurnScheduler {
    fn actor(&self) -> Actor {
        self.rotation().actor()
    }

    fn advance(&mut self) -> Advance {
        self.rotation_mut().advance()
    }

    fn round(&self) -> u32 {
        self.rotation().round()
    }

    fn rounds_total(&self) -> u32 {
        self.rotation().rounds_total()
    }

    fn turn_start(&self) -> TurnStart {
        self.rotation().turn_start()
    }

    fn on_correct(&mut self) -> CorrectFollowUp {
        self.rotation_mut().on_correct()
    }

    fn on_skip(&mut self) -> Option<PenaltyExit> {
        self.rotation_mut().on_skip()
    }

    fn on_expiry(&self) -> AfterExpiry {
        self.rotation().on_expiry()
    }

    fn allows_manual_advance(&self) -> bool {
        self.rotation().allows_manual_advance()
    }

    fn commit_swap(&mut self) {
        self.rotation_mut().commit_swap();
    }

    fn pending_performer(&self) -> Option<&str> {
        self.rotation().pending_performer()
    }

    fn reset(&mut self) {
        self.rotation_mut().reset();
    }
}
