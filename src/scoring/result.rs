//! End-of-game results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single entity with the top score.
    Winner { index: usize, score: u32 },
    /// Several entities share the top score (a draw).
    Tie {
        indices: SmallVec<[usize; 4]>,
        score: u32,
    },
}

impl GameResult {
    /// Compute the result from final scores.
    ///
    /// Every entity at the maximum score is a co-winner. Returns `None`
    /// only for an empty slice.
    #[must_use]
    pub fn from_scores(scores: &[u32]) -> Option<Self> {
        let top = *scores.iter().max()?;
        let indices: SmallVec<[usize; 4]> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == top)
            .map(|(i, _)| i)
            .collect();

        Some(match indices.as_slice() {
            [index] => GameResult::Winner {
                index: *index,
                score: top,
            },
            _ => GameResult::Tie { indices, score: top },
        })
    }

    /// Check if an entity won or shares the win.
    #[must_use]
    pub fn is_winner(&self, index: usize) -> bool {
        match self {
            GameResult::Winner { index: w, .. } => *w == index,
            GameResult::Tie { indices, .. } => indices.contains(&index),
        }
    }

    /// All winning entity indices.
    #[must_use]
    pub fn winners(&self) -> SmallVec<[usize; 4]> {
        match self {
            GameResult::Winner { index, .. } => SmallVec::from_slice(&[*index]),
            GameResult::Tie { indices, .. } => indices.clone(),
        }
    }

    /// The winning score.
    #[must_use]
    pub fn top_score(&self) -> u32 {
        match self {
            GameResult::Winner { score, .. } | GameResult::Tie { score, .. } => *score,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Tie { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_winner() {
        let result = GameResult::from_scores(&[2, 7, 3]).unwrap();
        assert_eq!(result, GameResult::Winner { index: 1, score: 7 });
        assert!(result.is_winner(1));
        assert!(!result.is_winner(0));
        assert!(!result.is_tie());
    }

    #[test]
    fn test_tie_detection() {
        let result = GameResult::from_scores(&[5, 5, 3]).unwrap();
        assert!(result.is_tie());
        assert_eq!(result.winners().as_slice(), &[0, 1]);
        assert_eq!(result.top_score(), 5);
        assert!(!result.is_winner(2));
    }

    #[test]
    fn test_all_zero_is_full_tie() {
        let result = GameResult::from_scores(&[0, 0]).unwrap();
        assert_eq!(result.winners().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_empty_scores() {
        assert_eq!(GameResult::from_scores(&[]), None);
    }
}
