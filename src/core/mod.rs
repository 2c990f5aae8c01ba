//! Core engine types: identifiers, roster, RNG, configuration.
//!
//! These are the building blocks shared by every other module. Nothing here
//! knows about phases or turns.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameMode, SessionConfig, TimerSettings, PENALTY_SECS};
pub use player::{PlayerId, Roster, Team, TeamId};
pub use rng::GameRng;
