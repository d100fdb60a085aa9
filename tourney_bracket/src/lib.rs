//! # Tourney Bracket
//!
//! Bracket tier derivation for tournament administration sites.
//!
//! The host application stores matches with winner/loser parent pointers and
//! asks this crate, on every bracket view, to turn them into ordered tiers
//! (final, semi finals, quarter finals, ...). Resolution is a pure read-side
//! computation over a snapshot the host supplies; nothing is persisted.
//!
//! ## Core Modules
//!
//! - [`bracket`]: Match model, bracket graph and tier resolver
//! - [`config`]: Resolver options, loadable from the environment
//!
//! ## Example
//!
//! ```
//! use tourney_bracket::{BracketError, Match, resolve_tiers};
//!
//! assert_eq!(resolve_tiers(&[]).unwrap_err(), BracketError::NoRoot);
//!
//! let matches = vec![Match::new(7, "Grand Final")];
//! assert_eq!(resolve_tiers(&matches).unwrap().ids(), vec![vec![7]]);
//! ```

/// Bracket graph, tiers and resolution.
pub mod bracket;
pub use bracket::{
    BracketError, BracketGraph, BracketResult, BracketSnapshot, MalformedReason, Match, MatchId,
    TeamId, TierResolver, Tiers, Tournament, TournamentId, resolve_tiers,
};

/// Resolver configuration.
pub mod config;
pub use config::{ConfigError, ResolverConfig, SharedFeederPolicy, SiblingOrder};
