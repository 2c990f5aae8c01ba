//! Inputs to and outputs from the session.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::schedule::Advance;

use super::Phase;

/// Who guessed the word in a free-for-all turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    Player(PlayerId),
    Nobody,
}

/// Something that happened: a user action or a timer signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Reveal a card (free-for-all `ready`).
    ShowCard,
    /// Confirm a handoff screen (`handoff` or `card-handoff`).
    Ready,
    /// The performer reports a correct guess ("end round" in free-for-all).
    Correct,
    /// Give up on the current card (team modes).
    Skip,
    /// Close the turn without points (free-for-all).
    NextPlayer,
    /// Change the pending guess selection.
    SelectGuesser(Guess),
    /// Apply the pending guess selection and close the turn.
    ConfirmGuess,
    /// One second elapsed for the countdown started at `epoch`.
    Tick { epoch: u64 },
    /// The countdown started at `epoch` ran out.
    TimerExpired { epoch: u64 },
    /// Same roster, fresh scores.
    PlayAgain,
    /// Hand control back to setup.
    Restart,
}

impl Event {
    /// Short name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Event::ShowCard => "show-card",
            Event::Ready => "ready",
            Event::Correct => "correct",
            Event::Skip => "skip",
            Event::NextPlayer => "next-player",
            Event::SelectGuesser(_) => "select-guesser",
            Event::ConfirmGuess => "confirm-guess",
            Event::Tick { .. } => "tick",
            Event::TimerExpired { .. } => "timer-expired",
            Event::PlayAgain => "play-again",
            Event::Restart => "restart",
        }
    }
}

/// Audio cues for the sound collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// Time is nearly up.
    TimerWarning,
    /// The game is over.
    Fanfare,
}

/// Side effects of an accepted event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    PhaseChanged { from: Phase, to: Phase },
    CardDealt(Card),
    ScoreAwarded { index: usize, points: u32 },
    TurnEnded(Advance),
    /// Schedule one `Tick { epoch }` per second from now on.
    TimerStarted { epoch: u64, duration: u32 },
    /// Stop scheduling ticks; any already queued are stale. Also sent when
    /// the clock runs out.
    TimerStopped,
    TimerTicked { remaining: u32 },
    /// Remaining time just dropped into the low range (UI emphasis).
    LowTime,
    Cue(Cue),
    /// The caller should discard this session and return to setup.
    RestartRequested,
}
