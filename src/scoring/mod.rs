//! Scoring rules and results.
//!
//! Scoring is pure: an [`Outcome`] turns into a [`ScoreDelta`], and a
//! [`Scoreboard`] applies deltas to produce a new board. Points are only
//! ever added, so no score can decrease.
//!
//! | Mode          | Event                  | Award                          |
//! |---------------|------------------------|--------------------------------|
//! | Free-for-all  | guess confirmed        | guesser +3, performer +1       |
//! | Free-for-all  | nobody guessed         | nothing                        |
//! | Teams         | correct                | acting team +1                 |
//! | Teams         | skip / timeout         | nothing                        |

mod board;
mod outcome;
mod result;

pub use board::{ScoreLine, Scoreboard};
pub use outcome::{Outcome, ScoreDelta, GUESSER_POINTS, PERFORMER_POINTS, TEAM_POINTS};
pub use result::GameResult;
