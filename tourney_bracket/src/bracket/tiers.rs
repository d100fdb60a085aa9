//! Resolved bracket tiers.

use super::models::{Match, MatchId};
use serde::Serialize;

/// Ordered bracket levels, from the final outward to the earliest round.
///
/// `levels()[0]` always holds exactly the final. Every other match appears
/// in exactly one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tiers<'a> {
    levels: Vec<Vec<&'a Match>>,
}

impl<'a> Tiers<'a> {
    pub(crate) fn new(levels: Vec<Vec<&'a Match>>) -> Self {
        Self { levels }
    }

    /// All levels, final first
    pub fn levels(&self) -> &[Vec<&'a Match>] {
        &self.levels
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a successful resolution
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The final match
    pub fn root(&self) -> Option<&'a Match> {
        self.levels.first().and_then(|level| level.first()).copied()
    }

    /// Total number of matches across all levels
    pub fn match_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Level contents as match ids
    pub fn ids(&self) -> Vec<Vec<MatchId>> {
        self.levels
            .iter()
            .map(|level| level.iter().map(|m| m.id).collect())
            .collect()
    }

    /// Hop distance of a match from the final
    pub fn depth_of(&self, id: MatchId) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|m| m.id == id))
    }

    /// Display name for the level at `depth`.
    ///
    /// The top three levels are named only while they form a plain knockout:
    /// two semis whose winners meet in the final, and four quarters feeding
    /// the semis the same way. Anything else is numbered from the earliest
    /// round, which is "Round 1".
    pub fn round_label(&self, depth: usize) -> Option<String> {
        (depth < self.levels.len()).then(|| self.label_at(depth))
    }

    /// Iterate `(label, level)` pairs, final first
    pub fn labelled(&self) -> impl Iterator<Item = (String, &[&'a Match])> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(move |(depth, level)| (self.label_at(depth), level.as_slice()))
    }

    fn label_at(&self, depth: usize) -> String {
        match depth {
            0 if self.is_knockout_level(0, 1) => "Final".to_string(),
            1 if self.is_knockout_level(1, 2) => "Semi Final".to_string(),
            2 if self.is_knockout_level(2, 4) => "Quarter Final".to_string(),
            _ => format!("Round {}", self.levels.len() - depth),
        }
    }

    // Level `depth` holds `size` matches, each a winner-feeder of the level
    // above, and the level above is itself a knockout level.
    fn is_knockout_level(&self, depth: usize, size: usize) -> bool {
        let Some(level) = self.levels.get(depth) else {
            return false;
        };
        if level.len() != size {
            return false;
        }
        if depth == 0 {
            return true;
        }
        if !self.is_knockout_level(depth - 1, size / 2) {
            return false;
        }

        let above = &self.levels[depth - 1];
        level.iter().all(|m| {
            m.winner_parent
                .is_some_and(|parent| above.iter().any(|p| p.id == parent))
        })
    }

    /// Consume into the raw levels
    pub fn into_levels(self) -> Vec<Vec<&'a Match>> {
        self.levels
    }
}
