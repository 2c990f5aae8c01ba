//! Error types.
//!
//! Configuration errors block a session from starting. Session errors are
//! rejections of a single event: the session is left exactly as it was.

use thiserror::Error;

use crate::session::Phase;

/// Invalid session configuration, reported back to setup.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count {0} is out of range (1-10)")]
    PlayerCount(usize),

    #[error("team count {0} is out of range (2-5)")]
    TeamCount(usize),

    #[error("team {team} has {size} players (2-10 required)")]
    TeamSize { team: String, size: usize },

    #[error("round count {0} is out of range (1-20)")]
    RoundCount(u32),

    #[error("timer duration {0}s is out of range (5-300)")]
    TimerDuration(u32),

    #[error("the selected themes produced no cards")]
    EmptyCardPool,

    #[error("roster does not match the game mode")]
    RosterMismatch,

    #[error("team modes need the timer enabled")]
    TimerRequired,

    #[error("name {0:?} is used more than once")]
    DuplicateName(String),
}

/// A rejected in-session event. Never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("confirm who guessed before moving on")]
    GuessPending,

    #[error("{event} is not allowed during {phase}")]
    InvalidTransition { phase: Phase, event: &'static str },

    #[error("no player with index {0}")]
    UnknownPlayer(usize),

    #[error("player {0} is performing and cannot be the guesser")]
    GuesserIsPerformer(usize),
}
