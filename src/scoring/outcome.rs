//! Outcomes and the points they are worth.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, TeamId};

/// Points for the player who guessed the word (free-for-all).
pub const GUESSER_POINTS: u32 = 3;
/// Points for the performer when someone guessed (free-for-all).
pub const PERFORMER_POINTS: u32 = 1;
/// Points for a team per correct guess.
pub const TEAM_POINTS: u32 = 1;

/// A confirmed result of play, ready to be scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Free-for-all turn closed; `guesser` is `None` when nobody got it.
    Solo {
        performer: PlayerId,
        guesser: Option<PlayerId>,
    },
    /// A team card resolved; `correct` is false for skips and timeouts.
    Team { team: TeamId, correct: bool },
}

impl Outcome {
    /// Points each scoring entity earns from this outcome.
    #[must_use]
    pub fn delta(self) -> ScoreDelta {
        let mut awards = SmallVec::new();
        match self {
            Outcome::Solo {
                performer,
                guesser: Some(guesser),
            } => {
                awards.push((guesser.index(), GUESSER_POINTS));
                awards.push((performer.index(), PERFORMER_POINTS));
            }
            Outcome::Team { team, correct: true } => {
                awards.push((team.index(), TEAM_POINTS));
            }
            Outcome::Solo { guesser: None, .. } | Outcome::Team { correct: false, .. } => {}
        }
        ScoreDelta { awards }
    }
}

/// Points to add, per entity index. Never negative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    awards: SmallVec<[(usize, u32); 2]>,
}

impl ScoreDelta {
    /// `(entity index, points)` pairs.
    pub fn awards(&self) -> &[(usize, u32)] {
        &self.awards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }
}
