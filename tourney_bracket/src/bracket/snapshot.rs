//! Copy-in snapshot of one tournament's bracket.
//!
//! Hosts export the tournament and its matches as JSON at request time; the
//! resolver then works only from this snapshot and never re-reads storage.

use super::errors::BracketResult;
use super::models::{Match, Tournament};
use super::resolver::TierResolver;
use super::tiers::Tiers;
use crate::config::ResolverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A tournament's matches as supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSnapshot {
    /// Owning tournament, if the host supplied it
    #[serde(default)]
    pub tournament: Option<Tournament>,
    /// Every match of the tournament, in any order
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl BracketSnapshot {
    /// Create a snapshot from owned records
    pub fn new(tournament: Option<Tournament>, matches: Vec<Match>) -> Self {
        Self {
            tournament,
            matches,
        }
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the snapshot to pretty JSON
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve this snapshot's matches into tiers
    pub fn resolve(&self, config: ResolverConfig) -> BracketResult<Tiers<'_>> {
        TierResolver::new(config).resolve(&self.matches)
    }

    /// Display label for a match, prefixed with the tournament when known
    pub fn label_for(&self, m: &Match) -> String {
        match &self.tournament {
            Some(tournament) => m.label(tournament),
            None => m.description.clone(),
        }
    }
}
