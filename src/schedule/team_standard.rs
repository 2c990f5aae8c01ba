//! Team-standard rotation: a precomputed, interleaved order per round.
//!
//! At the start of each round every team gets a fair-shuffle queue of its
//! players, drawn out to `max(team sizes)` turns (refilling mid-round for
//! smaller teams). The queues are then zipped position by position:
//! team 0's first performer, team 1's first performer, ..., team 0's
//! second performer, and so on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::FairShuffle;
use crate::core::{GameRng, Team, TeamId};
use crate::error::ConfigError;
use crate::scoring::Outcome;

use super::{
    Actor, Advance, AfterCorrect, AfterExpiry, CorrectFollowUp, PenaltyExit, Rotation, TurnStart,
};

/// One slot in a round's turn order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrderEntry {
    pub team: TeamId,
    pub player: String,
}

/// Round-robin over a per-round interleaved schedule.
#[derive(Clone, Debug)]
pub struct TeamStandard {
    queues: Vec<FairShuffle<String>>,
    order: Vec<TurnOrderEntry>,
    cursor: usize,
    round: u32,
    rounds_total: u32,
    rng: GameRng,
}

impl TeamStandard {
    pub fn new(teams: Vec<Team>, rounds_total: u32, mut rng: GameRng) -> Result<Self, ConfigError> {
        let queues = teams
            .into_iter()
            .map(|team| {
                let size = team.players.len();
                FairShuffle::new(team.players, &mut rng)
                    .ok_or(ConfigError::TeamSize { team: team.name, size })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if queues.is_empty() {
            return Err(ConfigError::TeamCount(0));
        }

        let mut standard = Self {
            queues,
            order: Vec::new(),
            cursor: 0,
            round: 1,
            rounds_total,
            rng,
        };
        standard.build_order();
        Ok(standard)
    }

    /// Rebuild the interleaved order for the current round.
    fn build_order(&mut self) {
        let max_turns = self.queues.iter().map(FairShuffle::pool_size).max().unwrap_or(0);

        let mut per_team: Vec<Vec<String>> = Vec::with_capacity(self.queues.len());
        for queue in &mut self.queues {
            queue.reset(&mut self.rng);
            per_team.push((0..max_turns).map(|_| queue.next(&mut self.rng)).collect());
        }

        self.order = (0..max_turns)
            .flat_map(|turn| {
                per_team.iter().enumerate().map(move |(team, players)| TurnOrderEntry {
                    team: TeamId::new(team as u8),
                    player: players[turn].clone(),
                })
            })
            .collect();
        self.cursor = 0;

        debug!(round = self.round, turns = self.order.len(), "built team turn order");
    }

    /// This round's full order.
    pub fn order(&self) -> &[TurnOrderEntry] {
        &self.order
    }

    /// Position of the current turn within [`Self::order`].
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn current(&self) -> &TurnOrderEntry {
        &self.order[self.cursor]
    }
}

impl Rotation for TeamStandard {
    fn actor(&self) -> Actor {
        let entry = self.current();
        Actor::Team {
            team: entry.team,
            performer: entry.player.clone(),
        }
    }

    fn advance(&mut self) -> Advance {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            return Advance::NextTurn;
        }
        if self.round >= self.rounds_total {
            return Advance::Finished;
        }
        self.round += 1;
        self.build_order();
        Advance::NewRound(self.round)
    }

    fn round(&self) -> u32 {
        self.round
    }

    fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    fn turn_start(&self) -> TurnStart {
        TurnStart::Handoff
    }

    fn on_correct(&mut self) -> CorrectFollowUp {
        CorrectFollowUp {
            award: Some(Outcome::Team {
                team: self.current().team,
                correct: true,
            }),
            next: AfterCorrect::NextCard,
        }
    }

    fn on_skip(&mut self) -> Option<PenaltyExit> {
        Some(PenaltyExit::NextCard)
    }

    fn on_expiry(&self) -> AfterExpiry {
        AfterExpiry::EndTurn
    }

    fn allows_manual_advance(&self) -> bool {
        false
    }

    fn commit_swap(&mut self) {}

    fn pending_performer(&self) -> Option<&str> {
        None
    }

    fn reset(&mut self) {
        self.round = 1;
        self.build_order();
    }
}
