//! Resolver configuration.
//!
//! All options have defaults; hosts may override them through environment
//! variables with [`ResolverConfig::from_env`].

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// What to do when a match is reachable from the final along two paths.
///
/// This happens in double-elimination data where one match sets both a
/// winner-parent and a loser-parent inside the same bracket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharedFeederPolicy {
    /// Treat the second path as malformed data
    #[default]
    Reject,
    /// Keep the match in the tier closest to the final
    Nearest,
}

impl std::fmt::Display for SharedFeederPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharedFeederPolicy::Reject => write!(f, "reject"),
            SharedFeederPolicy::Nearest => write!(f, "nearest"),
        }
    }
}

impl FromStr for SharedFeederPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(SharedFeederPolicy::Reject),
            "nearest" => Ok(SharedFeederPolicy::Nearest),
            other => Err(format!("expected 'reject' or 'nearest', got '{other}'")),
        }
    }
}

/// Order of sibling feeders within a tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiblingOrder {
    /// Ascending match id, independent of how the host listed the records
    #[default]
    #[serde(rename = "id")]
    ById,
    /// The order the host supplied the records in
    #[serde(rename = "input")]
    AsSupplied,
}

impl std::fmt::Display for SiblingOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiblingOrder::ById => write!(f, "id"),
            SiblingOrder::AsSupplied => write!(f, "input"),
        }
    }
}

impl FromStr for SiblingOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SiblingOrder::ById),
            "input" => Ok(SiblingOrder::AsSupplied),
            other => Err(format!("expected 'id' or 'input', got '{other}'")),
        }
    }
}

/// Tier resolver configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Handling of matches reachable along two paths
    pub shared_feeders: SharedFeederPolicy,
    /// Ordering of feeders within a tier
    pub sibling_order: SiblingOrder,
}

impl ResolverConfig {
    /// Environment variable selecting [`SharedFeederPolicy`]
    pub const SHARED_FEEDERS_VAR: &'static str = "BRACKET_SHARED_FEEDERS";
    /// Environment variable selecting [`SiblingOrder`]
    pub const SIBLING_ORDER_VAR: &'static str = "BRACKET_SIBLING_ORDER";

    /// Load configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `BRACKET_SHARED_FEEDERS`: `reject` or `nearest` (default: reject)
    /// - `BRACKET_SIBLING_ORDER`: `id` or `input` (default: id)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set to an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            shared_feeders: parse_env_or(Self::SHARED_FEEDERS_VAR, SharedFeederPolicy::default())?,
            sibling_order: parse_env_or(Self::SIBLING_ORDER_VAR, SiblingOrder::default())?,
        })
    }

    /// Configuration accepting double-elimination data with shared feeders
    pub fn double_elimination() -> Self {
        Self {
            shared_feeders: SharedFeederPolicy::Nearest,
            ..Self::default()
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    match env::var(key) {
        Ok(value) => value.trim().parse().map_err(|reason| ConfigError::Invalid {
            var: key.to_string(),
            reason,
        }),
        Err(_) => Ok(default),
    }
}
