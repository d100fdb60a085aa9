//! Bracket module deriving renderable tiers from a tournament's matches.
//!
//! A bracket is stored by the host as a flat set of matches, each pointing at
//! the match its winner (and optionally its loser) advances into. This module
//! rebuilds the tree from those parent pointers and lays it out as tiers:
//!
//! - **Tier 0**: the grand final, the one match with no parents
//! - **Tier n**: every match feeding into a match of tier n - 1
//!
//! Malformed data (several finals, cycles, dangling or duplicate ids) is
//! reported as a [`BracketError`] and never yields a partial result.
//!
//! ## Example
//!
//! ```
//! use tourney_bracket::bracket::{Match, TierResolver};
//!
//! let matches = vec![
//!     Match::new(1, "Final"),
//!     Match::new(2, "Semi A").with_winner_parent(1),
//!     Match::new(3, "Semi B").with_winner_parent(1),
//! ];
//!
//! let tiers = TierResolver::default().resolve(&matches).unwrap();
//! assert_eq!(tiers.ids(), vec![vec![1], vec![2, 3]]);
//! ```

pub mod errors;
pub mod graph;
pub mod models;
pub mod resolver;
pub mod snapshot;
pub mod tiers;

pub use errors::{BracketError, BracketResult, MalformedReason};
pub use graph::BracketGraph;
pub use models::{Match, MatchId, TeamId, Tournament, TournamentId};
pub use resolver::{TierResolver, resolve_tiers};
pub use snapshot::{BracketSnapshot, SnapshotError};
pub use tiers::Tiers;
