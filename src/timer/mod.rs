//! Countdown timing.
//!
//! The engine never owns a real clock. The host delivers one tick per
//! second; each tick yields a [`TickReport`] that the session consumes,
//! forwarding threshold crossings to the UI and audio collaborators.
//!
//! - `Countdown`: bare remaining-seconds counter (used for penalties)
//! - `TimerController`: the shared turn timer with start/stop/expire,
//!   threshold signals and an epoch that invalidates stale ticks

mod controller;
mod countdown;

pub use controller::{TickReport, TimerController, CUE_THRESHOLD_SECS, LOW_TIME_SECS};
pub use countdown::Countdown;
