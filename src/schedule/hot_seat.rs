//! Hot-seat rotation: teams take turns, teammates swap in mid-turn.
//!
//! The team's turn lasts exactly one shared countdown. Every correct guess
//! or skip hands the seat to the next teammate from the team's fair-shuffle
//! queue, but only timer expiry moves play to the next team.

use tracing::debug;

use crate::cards::FairShuffle;
use crate::core::{GameRng, Team, TeamId};
use crate::error::ConfigError;
use crate::scoring::Outcome;

use super::{
    Actor, Advance, AfterCorrect, AfterExpiry, CorrectFollowUp, PenaltyExit, Rotation, TurnStart,
};

/// Per-team queue of who takes the hot seat next.
///
/// Every teammate sits once before anyone sits again; the queue refills
/// with a fresh shuffle when drained.
#[derive(Clone, Debug)]
pub struct HotSeatQueue {
    queue: FairShuffle<String>,
}

impl HotSeatQueue {
    pub fn new(team: Team, rng: &mut GameRng) -> Result<Self, ConfigError> {
        let size = team.players.len();
        let queue = FairShuffle::new(team.players, rng).ok_or(ConfigError::TeamSize {
            team: team.name,
            size,
        })?;
        Ok(Self { queue })
    }

    /// The teammate who takes the seat next.
    pub fn next_player(&mut self, rng: &mut GameRng) -> String {
        self.queue.next(rng)
    }

    /// Drop the rest of the queue and reshuffle.
    pub fn reset(&mut self, rng: &mut GameRng) {
        self.queue.reset(rng);
    }
}

/// Round-robin over teams with a rotating performer inside each team.
#[derive(Clone, Debug)]
pub struct HotSeat {
    queues: Vec<HotSeatQueue>,
    team: usize,
    performer: String,
    pending: Option<String>,
    round: u32,
    rounds_total: u32,
    rng: GameRng,
}

impl HotSeat {
    pub fn new(teams: Vec<Team>, rounds_total: u32, mut rng: GameRng) -> Result<Self, ConfigError> {
        let mut queues = teams
            .into_iter()
            .map(|team| HotSeatQueue::new(team, &mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        let Some(first) = queues.first_mut() else {
            return Err(ConfigError::TeamCount(0));
        };
        let performer = first.next_player(&mut rng);

        Ok(Self {
            queues,
            team: 0,
            performer,
            pending: None,
            round: 1,
            rounds_total,
            rng,
        })
    }

    /// Team currently on turn.
    #[must_use]
    pub fn team(&self) -> TeamId {
        TeamId::new(self.team as u8)
    }

    /// Teammate holding the hot seat.
    #[must_use]
    pub fn performer(&self) -> &str {
        &self.performer
    }

    fn queue_next(&mut self) -> String {
        let next = self.queues[self.team].next_player(&mut self.rng);
        debug!(team = self.team, next = %next, "hot seat swap queued");
        self.pending = Some(next.clone());
        next
    }
}

impl Rotation for HotSeat {
    fn actor(&self) -> Actor {
        Actor::Team {
            team: self.team(),
            performer: self.performer.clone(),
        }
    }

    fn advance(&mut self) -> Advance {
        self.pending = None;

        let mut next = self.team + 1;
        let mut result = Advance::NextTurn;
        if next >= self.queues.len() {
            if self.round >= self.rounds_total {
                return Advance::Finished;
            }
            self.round += 1;
            next = 0;
            result = Advance::NewRound(self.round);
        }

        self.team = next;
        self.performer = self.queues[next].next_player(&mut self.rng);
        result
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
        let award = Outcome::Team {
            team: self.team(),
            correct: true,
        };
        let next = self.queue_next();
        CorrectFollowUp {
            award: Some(award),
            next: AfterCorrect::SwapPerformer { next },
        }
    }

    fn on_skip(&mut self) -> Option<PenaltyExit> {
        let next = self.queue_next();
        Some(PenaltyExit::SwapPerformer { next })
    }

    fn on_expiry(&self) -> AfterExpiry {
        AfterExpiry::EndTurn
    }

    fn allows_manual_advance(&self) -> bool {
        false
    }

    fn commit_swap(&mut self) {
        if let Some(next) = self.pending.take() {
            self.performer = next;
        }
    }

    fn pending_performer(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    fn reset(&mut self) {
        for queue in &mut self.queues {
            queue.reset(&mut self.rng);
        }
        self.team = 0;
        self.round = 1;
        self.pending = None;
        self.performer = self.queues[0].next_player(&mut self.rng);
    }
}
