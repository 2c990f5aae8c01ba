//! # charades-engine
//!
//! Session engine for a party word-guessing game: one person acts out a
//! word, the others guess.
//!
//! ## Design Principles
//!
//! 1. **Event-Driven**: A [`Session`] only changes in response to an
//!    [`Event`]. Every accepted event returns the [`Effect`]s the host should
//!    act on; every rejected one leaves the session untouched.
//!
//! 2. **Mode as Strategy**: Free-for-all, team standard and hot seat differ
//!    only in the [`TurnScheduler`] they run. The session asks the scheduler
//!    what happens next and never switches on the mode itself.
//!
//! 3. **No Stale Timers**: Every timer start and stop moves to a new epoch.
//!    Ticks and expiries from an older epoch are dropped.
//!
//! ## Architecture
//!
//! - **Fair Shuffle**: Cards and hot-seat queues use a cycle-based shuffle,
//!   so nothing repeats until everything has been used once.
//!
//! - **Deterministic RNG**: ChaCha8 with independent per-concern streams;
//!   a fixed seed reproduces a whole session.
//!
//! - **Persistent Scoreboard**: `im-rs` backed, so snapshots are cheap.
//!
//! ## Modules
//!
//! - `core`: IDs, roster, RNG, configuration
//! - `cards`: Cards, theme catalog, fair-shuffle deck
//! - `schedule`: Turn rotation strategies
//! - `timer`: Turn clock and penalty countdown
//! - `scoring`: Outcomes, scoreboard, final result
//! - `session`: Phase state machine tying it all together
//! - `error`: Configuration and session errors

pub mod cards;
pub mod core;
pub mod error;
pub mod schedule;
pub mod scoring;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{
    GameMode, GameRng, PlayerId, Roster, SessionConfig, Team, TeamId, TimerSettings,
};

pub use crate::cards::{Card, CardDeck, FairShuffle, Theme, ThemeCatalog};

pub use crate::schedule::{Actor, Advance, Rotation, TurnScheduler};

pub use crate::timer::{TickReport, TimerController};

pub use crate::scoring::{GameResult, Outcome, ScoreDelta, Scoreboard};

pub use crate::session::{Cue, Effect, Event, Guess, Phase, Session, SessionSnapshot};

pub use crate::error::{ConfigError, SessionError};
