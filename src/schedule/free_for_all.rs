//! Free-for-all rotation: plain round-robin over players.

use crate::core::PlayerId;

use super::{
    Actor, Advance, AfterCorrect, AfterExpiry, CorrectFollowUp, PenaltyExit, Rotation, TurnStart,
};

/// Round-robin over individual players.
///
/// Scoring waits for the group to confirm who guessed, so a correct guess
/// and timer expiry both lead to the guess prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeForAll {
    player_count: usize,
    current: usize,
    round: u32,
    rounds_total: u32,
}

impl FreeForAll {
    pub fn new(player_count: usize, rounds_total: u32) -> Self {
        Self {
            player_count,
            current: 0,
            round: 1,
            rounds_total,
        }
    }

    /// Index of the performing player.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }
}

impl Rotation for FreeForAll {
    fn actor(&self) -> Actor {
        Actor::Player(self.current())
    }

    fn advance(&mut self) -> Advance {
        let mut next = self.current + 1;
        let mut round = self.round;
        if next >= self.player_count {
            next = 0;
            round += 1;
        }
        if round > self.rounds_total {
            return Advance::Finished;
        }

        let wrapped = round != self.round;
        self.current = next;
        self.round = round;
        if wrapped {
            Advance::NewRound(round)
        } else {
            Advance::NextTurn
        }
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    fn turn_start(&self) -> TurnStart {
        TurnStart::ShowCard
    }

    fn on_correct(&mut self) -> CorrectFollowUp {
        CorrectFollowUp {
            award: None,
            next: AfterCorrect::AwaitGuess,
        }
    }

    fn on_skip(&mut self) -> Option<PenaltyExit> {
        None
    }

    fn on_expiry(&self) -> AfterExpiry {
        AfterExpiry::AwaitGuess
    }

    fn allows_manual_advance(&self) -> bool {
        true
    }

    fn commit_swap(&mut self) {}

    fn pending_performer(&self) -> Option<&str> {
        None
    }

    fn reset(&mut self) {
        self.current = 0;
        self.round = 1;
    }
}
