//! The scoreboard.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{GameResult, ScoreDelta};

/// One scoring entity (player or team) and its points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub name: String,
    pub score: u32,
}

/// Scores for every entity, in roster order.
///
/// Backed by `im::Vector` so snapshots share structure with the live board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    lines: Vector<ScoreLine>,
}

impl Scoreboard {
    /// Zeroed board for the given entity names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: names
                .into_iter()
                .map(|n| ScoreLine {
                    name: n.into(),
                    score: 0,
                })
                .collect(),
        }
    }

    /// Board with `delta` added. The receiver is left untouched.
    #[must_use]
    pub fn apply(&self, delta: &ScoreDelta) -> Self {
        let mut lines = self.lines.clone();
        for &(index, points) in delta.awards() {
            if let Some(line) = lines.get_mut(index) {
                line.score = line.score.saturating_add(points);
            }
        }
        Self { lines }
    }

    /// Same names, every score back to zero.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.lines.iter().map(|l| l.name.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn score(&self, index: usize) -> Option<u32> {
        self.lines.get(index).map(|l| l.score)
    }

    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| l.name.as_str())
    }

    pub fn lines(&self) -> impl Iterator<Item = &ScoreLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.lines.iter().map(|l| l.score).collect()
    }

    /// Entity indices ordered by score, highest first.
    ///
    /// Equal scores keep roster order.
    #[must_use]
    pub fn standings(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.lines.len()).collect();
        order.sort_by(|&a, &b| self.lines[b].score.cmp(&self.lines[a].score));
        order
    }

    /// Winner or co-winners on the current scores.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_scores(&self.scores())
    }
}
