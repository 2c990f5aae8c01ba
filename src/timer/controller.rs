//! The shared turn timer.

use serde::{Deserialize, Serialize};

use super::Countdown;

/// Remaining time at or below which the UI emphasises the timer.
pub const LOW_TIME_SECS: u32 = 10;
/// The warning cue plays on the tick that leaves this many seconds.
pub const CUE_THRESHOLD_SECS: u32 = 11;

/// What a single tick did to the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Seconds left after this tick.
    pub remaining: u32,
    /// Remaining time dropped to `LOW_TIME_SECS` or below on this tick.
    pub crossed_low_threshold: bool,
    /// Remaining time dropped below `CUE_THRESHOLD_SECS` on this tick.
    pub crossed_cue_threshold: bool,
    /// The countdown reached zero on this tick. The timer is now stopped.
    pub expired: bool,
}

/// Single countdown with start/stop/expire semantics.
///
/// ## Epochs
///
/// Every `start` and `stop` moves the timer to a new epoch. A tick is only
/// applied when it carries the current epoch and the timer is running, so
/// a tick scheduled before a cancellation can never land afterwards.
///
/// ## Thresholds
///
/// Each threshold fires at most once per countdown. The low-time signal
/// fires on the tick that reaches `LOW_TIME_SECS`; the cue fires on the tick
/// that leaves `CUE_THRESHOLD_SECS`. A countdown started past a threshold
/// never reports crossing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerController {
    duration: u32,
    countdown: Countdown,
    running: bool,
    epoch: u64,
}

impl TimerController {
    /// Create a stopped timer showing `duration` seconds.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            countdown: Countdown::new(duration),
            running: false,
            epoch: 0,
        }
    }

    /// Start counting down from `duration`, cancelling any running countdown.
    ///
    /// Returns the epoch ticks for this countdown must carry.
    pub fn start(&mut self, duration: u32) -> u64 {
        self.duration = duration;
        self.countdown = Countdown::new(duration);
        self.running = true;
        self.epoch += 1;
        self.epoch
    }

    /// Freeze the countdown. Ticks already scheduled become stale.
    ///
    /// Remaining time is kept so it can still be shown.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.epoch += 1;
        }
    }

    /// Apply one elapsed second.
    ///
    /// Returns `None` for stale ticks (foreign epoch or stopped timer).
    pub fn tick(&mut self, epoch: u64) -> Option<TickReport> {
        if !self.running || epoch != self.epoch {
            return None;
        }

        let before = self.countdown.remaining();
        let expired = self.countdown.tick();
        let after = self.countdown.remaining();
        if expired {
            self.running = false;
        }

        Some(TickReport {
            remaining: after,
            crossed_low_threshold: before > LOW_TIME_SECS && after <= LOW_TIME_SECS,
            crossed_cue_threshold: before >= CUE_THRESHOLD_SECS && after < CUE_THRESHOLD_SECS,
            expired,
        })
    }

    /// Accept an expiry signal for `epoch`.
    ///
    /// A running countdown is cut to zero. A countdown that already ran out
    /// on a tick accepts the signal as well, so the caller can route both
    /// through one path. Anything else is stale.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        if self.running {
            self.countdown = Countdown::new(0);
            self.running = false;
            return true;
        }
        self.countdown.is_done()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Epoch the next valid tick must carry.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether the UI should show the low-time emphasis.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining() <= LOW_TIME_SECS
    }
}
