//! Plain second counter.

use serde::{Deserialize, Serialize};

/// Remaining seconds of a fixed-length wait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub const fn new(secs: u32) -> Self {
        Self { remaining: secs }
    }

    /// Count down one second. Returns `true` once the wait is over.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_done() {
        let mut c = Countdown::new(3);
        assert!(!c.tick());
        assert!(!c.tick());
        assert!(c.tick());
        assert!(c.is_done());

        // Extra ticks stay at zero.
        assert!(c.tick());
        assert_eq!(c.remaining(), 0);
    }
}
