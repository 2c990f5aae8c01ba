//! Session configuration.
//!
//! The setup collaborator fills in a `SessionConfig` and the engine
//! validates it before a session starts:
//! - `GameMode`: free-for-all, team standard, or team hot seat
//! - `Roster`: players or teams, matching the mode
//! - round count, timer settings, card pool and an optional seed

use std::ops::RangeInclusive;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{Roster, Team};
use crate::cards::Card;
use crate::error::ConfigError;

/// Allowed free-for-all player counts.
pub const PLAYER_COUNT: RangeInclusive<usize> = 1..=10;
/// Allowed number of teams.
pub const TEAM_COUNT: RangeInclusive<usize> = 2..=5;
/// Allowed players per team.
pub const TEAM_SIZE: RangeInclusive<usize> = 2..=10;
/// Allowed number of rounds.
pub const ROUNDS: RangeInclusive<u32> = 1..=20;
/// Allowed timer durations in seconds.
pub const TIMER_SECS: RangeInclusive<u32> = 5..=300;
/// Length of the post-skip penalty in team modes, in seconds.
pub const PENALTY_SECS: u32 = 5;

/// Game mode, chosen once at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Everyone plays for themselves; one performer per turn.
    FreeForAll,
    /// Teams alternate; each turn a predetermined player performs until the
    /// timer runs out.
    TeamStandard,
    /// Teams alternate; teammates swap in after every correct guess or skip
    /// while one shared timer runs.
    HotSeat,
}

impl GameMode {
    #[must_use]
    pub fn is_team(self) -> bool {
        !matches!(self, GameMode::FreeForAll)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameMode::FreeForAll => "free-for-all",
            GameMode::TeamStandard => "team-standard",
            GameMode::HotSeat => "hot-seat",
        };
        f.write_str(name)
    }
}

/// Countdown settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSettings {
    pub enabled: bool,
    pub duration_secs: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            duration_secs: 30,
        }
    }
}

/// Complete configuration for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub roster: Roster,
    pub rounds_total: u32,
    pub timer: TimerSettings,
    pub card_pool: Vec<Card>,
    /// Fixed seed for reproducible shuffles; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Free-for-all configuration with default settings (3 rounds, no timer).
    pub fn free_for_all<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: GameMode::FreeForAll,
            roster: Roster::players(players),
            rounds_total: 3,
            timer: TimerSettings::default(),
            card_pool: Vec::new(),
            seed: None,
        }
    }

    /// Team configuration with default settings (2 rounds, 12 second timer).
    pub fn teams(mode: GameMode, teams: Vec<Team>) -> Self {
        Self {
            mode,
            roster: Roster::Teams(teams),
            rounds_total: 2,
            timer: TimerSettings {
                enabled: true,
                duration_secs: 12,
            },
            card_pool: Vec::new(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds_total = rounds;
        self
    }

    /// Enable the timer with the given duration.
    #[must_use]
    pub fn with_timer(mut self, duration_secs: u32) -> Self {
        self.timer = TimerSettings {
            enabled: true,
            duration_secs,
        };
        self
    }

    #[must_use]
    pub fn without_timer(mut self) -> Self {
        self.timer.enabled = false;
        self
    }

    #[must_use]
    pub fn with_cards(mut self, pool: Vec<Card>) -> Self {
        self.card_pool = pool;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fill blank names and check every limit.
    ///
    /// Returns the normalized configuration the session runs with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let config = Self {
            roster: self.roster.with_default_names(),
            ..self
        };

        match (&config.roster, config.mode.is_team()) {
            (Roster::Players(names), false) => {
                if !PLAYER_COUNT.contains(&names.len()) {
                    return Err(ConfigError::PlayerCount(names.len()));
                }
                check_unique(names.iter())?;
            }
            (Roster::Teams(teams), true) => {
                if !TEAM_COUNT.contains(&teams.len()) {
                    return Err(ConfigError::TeamCount(teams.len()));
                }
                for team in teams {
                    if !TEAM_SIZE.contains(&team.players.len()) {
                        return Err(ConfigError::TeamSize {
                            team: team.name.clone(),
                            size: team.players.len(),
                        });
                    }
                }
                check_unique(teams.iter().map(|t| &t.name))?;
                check_unique(teams.iter().flat_map(|t| t.players.iter()))?;
                if !config.timer.enabled {
                    return Err(ConfigError::TimerRequired);
                }
            }
            _ => return Err(ConfigError::RosterMismatch),
        }

        if !ROUNDS.contains(&config.rounds_total) {
            return Err(ConfigError::RoundCount(config.rounds_total));
        }
        if config.timer.enabled && !TIMER_SECS.contains(&config.timer.duration_secs) {
            return Err(ConfigError::TimerDuration(config.timer.duration_secs));
        }
        if config.card_pool.is_empty() {
            return Err(ConfigError::EmptyCardPool);
        }

        Ok(config)
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a String>) -> Result<(), ConfigError> {
    let mut seen = FxHashSet::default();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ConfigError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        vec![Card::new("Kite", "Mixed"), Card::new("Harp", "Mixed")]
    }

    fn two_teams() -> Vec<Team> {
        vec![Team::new("Reds", ["a", "b"]), Team::new("Blues", ["c", "d"])]
    }

    #[test]
    fn test_valid_free_for_all() {
        let config = SessionConfig::free_for_all(["Ann", "", "Cy"])
            .with_rounds(5)
            .with_timer(60)
            .with_cards(cards())
            .validate()
            .unwrap();

        assert_eq!(config.roster, Roster::players(["Ann", "Player 2", "Cy"]));
        assert_eq!(config.rounds_total, 5);
        assert!(config.timer.enabled);
    }

    #[test]
    fn test_player_count_limits() {
        let none: Vec<String> = vec![];
        let err = SessionConfig::free_for_all(none).with_cards(cards()).validate();
        assert_eq!(err.unwrap_err(), ConfigError::PlayerCount(0));

        let eleven: Vec<String> = (0..11).map(|i| format!("p{}", i)).collect();
        let err = SessionConfig::free_for_all(eleven).with_cards(cards()).validate();
        assert_eq!(err.unwrap_err(), ConfigError::PlayerCount(11));

        let solo = SessionConfig::free_for_all(["Lonely"]).with_cards(cards()).validate();
        assert!(solo.is_ok());
    }

    #[test]
    fn test_round_and_timer_limits() {
        let base = SessionConfig::free_for_all(["a", "b"]).with_cards(cards());

        assert_eq!(
            base.clone().with_rounds(0).validate().unwrap_err(),
            ConfigError::RoundCount(0)
        );
        assert_eq!(
            base.clone().with_rounds(21).validate().unwrap_err(),
            ConfigError::RoundCount(21)
        );
        assert_eq!(
            base.clone().with_timer(4).validate().unwrap_err(),
            ConfigError::TimerDuration(4)
        );
        assert_eq!(
            base.clone().with_timer(301).validate().unwrap_err(),
            ConfigError::TimerDuration(301)
        );
        assert!(base.with_rounds(20).with_timer(300).validate().is_ok());
    }

    #[test]
    fn test_empty_pool() {
        let err = SessionConfig::free_for_all(["a"]).validate().unwrap_err();
        assert_eq!(err, ConfigError::EmptyCardPool);
    }

    #[test]
    fn test_team_limits() {
        let one_team = vec![Team::new("Solo", ["a", "b"])];
        let err = SessionConfig::teams(GameMode::TeamStandard, one_team)
            .with_cards(cards())
            .validate();
        assert_eq!(err.unwrap_err(), ConfigError::TeamCount(1));

        let small = vec![Team::new("Reds", ["a"]), Team::new("Blues", ["c", "d"])];
        let err = SessionConfig::teams(GameMode::HotSeat, small)
            .with_cards(cards())
            .validate();
        assert_eq!(
            err.unwrap_err(),
            ConfigError::TeamSize {
                team: "Reds".to_string(),
                size: 1
            }
        );
    }

    #[test]
    fn test_team_mode_needs_timer() {
        let err = SessionConfig::teams(GameMode::HotSeat, two_teams())
            .without_timer()
            .with_cards(cards())
            .validate();
        assert_eq!(err.unwrap_err(), ConfigError::TimerRequired);
    }

    #[test]
    fn test_roster_must_match_mode() {
        let mut config = SessionConfig::free_for_all(["a", "b"]).with_cards(cards());
        config.mode = GameMode::TeamStandard;
        assert_eq!(config.validate().unwrap_err(), ConfigError::RosterMismatch);

        let mut config = SessionConfig::teams(GameMode::HotSeat, two_teams()).with_cards(cards());
        config.mode = GameMode::FreeForAll;
        assert_eq!(config.validate().unwrap_err(), ConfigError::RosterMismatch);
    }

    #[test]
    fn test_duplicate_names() {
        let err = SessionConfig::free_for_all(["Bo", "Bo"]).with_cards(cards()).validate();
        assert_eq!(err.unwrap_err(), ConfigError::DuplicateName("Bo".to_string()));

        let teams = vec![Team::new("Reds", ["a", "b"]), Team::new("Blues", ["b", "c"])];
        let err = SessionConfig::teams(GameMode::TeamStandard, teams)
            .with_cards(cards())
            .validate();
        assert_eq!(err.unwrap_err(), ConfigError::DuplicateName("b".to_string()));
    }

    #[test]
    fn test_config_serde() {
        let config = SessionConfig::teams(GameMode::HotSeat, two_teams())
            .with_cards(cards())
            .with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
