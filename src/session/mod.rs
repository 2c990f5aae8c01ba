//! The session orchestrator.
//!
//! A [`Session`] owns everything about one play-through: the phase, the
//! scheduler, the deck, the timer and the scoreboard. It is driven purely
//! by [`Event`]s, one at a time; every accepted event returns the
//! [`Effect`]s collaborators should act on, and a [`SessionSnapshot`] can be
//! taken after any step for rendering.
//!
//! ## Phase graph
//!
//! ```text
//! ready ──show card──▶ playing ──correct──▶ awaiting-guess ──confirm──▶ ready | gameover
//!                        │  (free-for-all; expiry also opens the prompt)
//!                        │
//! handoff ──ready──▶ playing ──correct──▶ playing (standard: next card)
//!                        │        └──────▶ card-handoff ──ready──▶ playing (hot seat)
//!                        └──skip──▶ penalty ──5s──▶ playing | card-handoff
//!
//! timer expiry in playing / card-handoff / penalty (teams) ──▶ handoff | gameover
//! gameover ──play again──▶ ready | handoff
//! ```

mod event;
mod machine;
mod phase;
mod snapshot;

pub use event::{Cue, Effect, Event, Guess};
pub use machine::Session;
pub use phase::Phase;
pub use snapshot::{ActorView, SessionSnapshot, TimerView};
