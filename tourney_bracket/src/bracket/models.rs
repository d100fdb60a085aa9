//! Tournament and match data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Match ID type
pub type MatchId = i64;

/// Team ID type
pub type TeamId = i64;

/// Tournament ID type
pub type TournamentId = i64;

/// A tournament for a single game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Tournament ID
    pub id: TournamentId,
    /// Name of the event hosting the tournament
    pub event: String,
    /// Tournament name
    pub name: String,
    /// Scheduled start
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Tournament {
    /// Create a new tournament
    pub fn new(id: TournamentId, event: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            event: event.into(),
            name: name.into(),
            date: None,
        }
    }

    /// Set the scheduled start
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.event, self.name)
    }
}

/// A single node of the bracket.
///
/// Only `winner_parent` and `loser_parent` matter for tier derivation. Team
/// lists are carried through untouched for the host to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Match ID, unique within its tournament
    pub id: MatchId,
    /// Display label
    pub description: String,
    /// Match the winner advances into (None on the final)
    #[serde(default)]
    pub winner_parent: Option<MatchId>,
    /// Match the loser advances into
    #[serde(default)]
    pub loser_parent: Option<MatchId>,
    /// Participating teams
    #[serde(default)]
    pub teams: Vec<TeamId>,
    /// Teams recorded as having won the match
    #[serde(default)]
    pub match_winners: Vec<TeamId>,
    /// Teams recorded as having lost the match
    #[serde(default)]
    pub match_losers: Vec<TeamId>,
}

impl Match {
    /// Create a match with no parents and no teams
    pub fn new(id: MatchId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            winner_parent: None,
            loser_parent: None,
            teams: Vec::new(),
            match_winners: Vec::new(),
            match_losers: Vec::new(),
        }
    }

    /// Route the winner of this match into `parent`
    pub fn with_winner_parent(mut self, parent: MatchId) -> Self {
        self.winner_parent = Some(parent);
        self
    }

    /// Route the loser of this match into `parent`
    pub fn with_loser_parent(mut self, parent: MatchId) -> Self {
        self.loser_parent = Some(parent);
        self
    }

    /// Attach participating teams
    pub fn with_teams(mut self, teams: Vec<TeamId>) -> Self {
        self.teams = teams;
        self
    }

    /// True for a match that feeds nowhere, i.e. a final
    pub fn is_parentless(&self) -> bool {
        self.winner_parent.is_none() && self.loser_parent.is_none()
    }

    /// Parent ids in walk order: winner first, then loser
    pub fn parents(&self) -> [Option<MatchId>; 2] {
        [self.winner_parent, self.loser_parent]
    }

    /// Full label including the tournament, e.g. `"WGF Smash: Grand Final"`
    pub fn label(&self, tournament: &Tournament) -> String {
        format!("{}: {}", tournament, self.description)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_builder() {
        let m = Match::new(2, "Semi A")
            .with_winner_parent(1)
            .with_teams(vec![10, 11]);

        assert_eq!(m.winner_parent, Some(1));
        assert_eq!(m.loser_parent, None);
        assert_eq!(m.teams, vec![10, 11]);
        assert!(!m.is_parentless());
        assert_eq!(m.parents(), [Some(1), None]);
    }

    #[test]
    fn test_loser_parent_alone_is_not_parentless() {
        let m = Match::new(5, "Winners Semi").with_loser_parent(3);
        assert!(!m.is_parentless());
        assert!(Match::new(1, "Final").is_parentless());
    }

    #[test]
    fn test_labels() {
        let tournament = Tournament::new(1, "WGF 2011", "Smash Bros");
        let m = Match::new(1, "Grand Final");

        assert_eq!(tournament.to_string(), "WGF 2011 Smash Bros");
        assert_eq!(m.to_string(), "Grand Final");
        assert_eq!(m.label(&tournament), "WGF 2011 Smash Bros: Grand Final");
    }

    #[test]
    fn test_match_deserialize_defaults() {
        let m: Match = serde_json::from_str(r#"{"id": 3, "description": "Quarter"}"#).unwrap();
        assert!(m.is_parentless());
        assert!(m.teams.is_empty());
        assert!(m.match_winners.is_empty());
    }
}
