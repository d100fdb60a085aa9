//! Bracket error types.

use super::models::MatchId;
use thiserror::Error;

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;

/// Errors surfaced while deriving tiers from a match set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// The tournament has no matches yet
    #[error("Tournament has no matches")]
    NoRoot,

    /// More than one match has neither a winner-parent nor a loser-parent
    #[error("Multiple final matches found: {roots:?}")]
    AmbiguousRoot { roots: Vec<MatchId> },

    /// The match graph is not a single bracket rooted at the final
    #[error("Tournament bracket is malformed: {0}")]
    TourneyMalformed(#[from] MalformedReason),
}

impl BracketError {
    /// Whether this error only means the bracket has not been built yet.
    ///
    /// Hosts render this as an empty bracket notice rather than a data error.
    pub fn is_not_built(&self) -> bool {
        matches!(self, BracketError::NoRoot)
    }
}

/// Why a match set failed to form a bracket
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Two records share an id
    #[error("match {0} appears more than once")]
    DuplicateMatch(MatchId),

    /// A parent reference names a match outside the set
    #[error("match {match_id} points to unknown parent {parent_id}")]
    UnknownParent { match_id: MatchId, parent_id: MatchId },

    /// Every match has a parent, so none can be the final
    #[error("no match is free of parents")]
    RootMissing,

    /// Following parent pointers from this match leads back to it
    #[error("match {0} is part of a parent cycle")]
    Cycle(MatchId),

    /// A match feeds into two matches that both sit in the bracket
    #[error("match {0} is reachable from the final along more than one path")]
    MultiplePaths(MatchId),

    /// These matches never lead to the final.
    ///
    /// Unreachable once the root is unique and the cycle check has passed,
    /// since every acyclic parent chain then ends at the final. Kept as a
    /// backstop for the walk.
    #[error("matches {0:?} are not connected to the final")]
    Unreachable(Vec<MatchId>),

    /// The walk produced more tiers than there are matches.
    ///
    /// Unreachable once the cycle check has passed, since each tier places at
    /// least one new match. Kept as a backstop for the walk.
    #[error("traversal exceeded {0} tiers")]
    TraversalLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BracketError::AmbiguousRoot { roots: vec![3, 7] };
        assert_eq!(err.to_string(), "Multiple final matches found: [3, 7]");

        let err = BracketError::from(MalformedReason::UnknownParent {
            match_id: 4,
            parent_id: 99,
        });
        assert!(err.to_string().contains("unknown parent 99"));
    }

    #[test]
    fn test_is_not_built() {
        assert!(BracketError::NoRoot.is_not_built());
        assert!(!BracketError::AmbiguousRoot { roots: vec![1, 2] }.is_not_built());
        assert!(!BracketError::TourneyMalformed(MalformedReason::RootMissing).is_not_built());
    }
}
