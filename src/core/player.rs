//! Player and team identification plus the roster handed in by setup.
//!
//! ## PlayerId / TeamId
//!
//! Type-safe 0-based indices into the roster. Free-for-all sessions score
//! per player; team sessions score per team and only track player *names*
//! inside each team.
//!
//! ## Roster
//!
//! The roster as collected by the setup collaborator. Blank names are
//! filled with defaults by [`Roster::with_default_names`].

use serde::{Deserialize, Serialize};

/// Player index in a free-for-all roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use charades::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Team index in a team roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// A team: a name and the ordered names of its players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new<I, S>(name: impl Into<String>, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            players: players.into_iter().map(Into::into).collect(),
        }
    }
}

/// Who is playing: individual players or teams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roster {
    /// Free-for-all: every name scores individually.
    Players(Vec<String>),
    /// Team play: scores are kept per team.
    Teams(Vec<Team>),
}

impl Roster {
    /// Build a free-for-all roster from names.
    pub fn players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Roster::Players(names.into_iter().map(Into::into).collect())
    }

    /// Number of scoring entities (players or teams).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Roster::Players(names) => names.len(),
            Roster::Teams(teams) => teams.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of the scoring entities, in roster order.
    #[must_use]
    pub fn entity_names(&self) -> Vec<String> {
        match self {
            Roster::Players(names) => names.clone(),
            Roster::Teams(teams) => teams.iter().map(|t| t.name.clone()).collect(),
        }
    }

    /// Fill blank names the way the setup screens label empty fields.
    ///
    /// Players become `Player N`, teams `Team N`, and team members
    /// `<team name> P<N>` (using the already-defaulted team name).
    #[must_use]
    pub fn with_default_names(self) -> Self {
        fn or_default(name: String, default: impl FnOnce() -> String) -> String {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                default()
            } else {
                trimmed.to_string()
            }
        }

        match self {
            Roster::Players(names) => Roster::Players(
                names
                    .into_iter()
                    .enumerate()
                    .map(|(i, n)| or_default(n, || format!("Player {}", i + 1)))
                    .collect(),
            ),
            Roster::Teams(teams) => Roster::Teams(
                teams
                    .into_iter()
                    .enumerate()
                    .map(|(ti, team)| {
                        let name = or_default(team.name, || format!("Team {}", ti + 1));
                        let players = team
                            .players
                            .into_iter()
                            .enumerate()
                            .map(|(pi, p)| or_default(p, || format!("{} P{}", name, pi + 1)))
                            .collect();
                        Team { name, players }
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
        assert_eq!(format!("{}", TeamId::new(2)), "Team 2");
    }

    #[test]
    fn test_roster_len_and_names() {
        let solo = Roster::players(["Ann", "Bo", "Cy"]);
        assert_eq!(solo.len(), 3);
        assert_eq!(solo.entity_names(), vec!["Ann", "Bo", "Cy"]);

        let teams = Roster::Teams(vec![
            Team::new("Reds", ["a", "b"]),
            Team::new("Blues", ["c", "d", "e"]),
        ]);
        assert_eq!(teams.len(), 2);
        assert_eq!(teams.entity_names(), vec!["Reds", "Blues"]);
    }

    #[test]
    fn test_default_player_names() {
        let roster = Roster::players(["", "  Bo ", " "]).with_default_names();
        assert_eq!(roster, Roster::players(["Player 1", "Bo", "Player 3"]));
    }

    #[test]
    fn test_default_team_names() {
        let roster = Roster::Teams(vec![
            Team::new("", ["", "Kim"]),
            Team::new("Owls", ["Lu", ""]),
        ])
        .with_default_names();

        assert_eq!(
            roster,
            Roster::Teams(vec![
                Team::new("Team 1", ["Team 1 P1", "Kim"]),
                Team::new("Owls", ["Lu", "Owls P2"]),
            ])
        );
    }
}
