//! Breadth-first tier resolution from the final outward.

use super::errors::{BracketResult, MalformedReason};
use super::graph::BracketGraph;
use super::models::Match;
use super::tiers::Tiers;
use crate::config::{ResolverConfig, SharedFeederPolicy};

/// Derives ordered tiers from a tournament's match set.
///
/// Stateless apart from its configuration; every call builds and drops its
/// own graph, visited set and frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierResolver {
    config: ResolverConfig,
}

impl TierResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `matches` into tiers, final first.
    ///
    /// Within a tier, the feeders of each match in the previous tier are
    /// emitted in that tier's order: winner-feeders first, then
    /// loser-feeders, each group in the configured sibling order.
    ///
    /// # Errors
    ///
    /// * `NoRoot` - `matches` is empty
    /// * `AmbiguousRoot` - more than one match has no parent
    /// * `TourneyMalformed` - duplicate or dangling ids, a cycle, a match
    ///   reachable along two paths (unless shared feeders are allowed), or a
    ///   match not connected to the final
    pub fn resolve<'a>(&self, matches: &'a [Match]) -> BracketResult<Tiers<'a>> {
        let result = self.walk(matches);
        if let Err(e) = &result {
            if e.is_not_built() {
                log::debug!("Bracket not built yet: no matches supplied");
            } else {
                log::warn!("Failed to resolve bracket of {} matches: {}", matches.len(), e);
            }
        }
        result
    }

    fn walk<'a>(&self, matches: &'a [Match]) -> BracketResult<Tiers<'a>> {
        let graph = BracketGraph::build_with_order(matches, self.config.sibling_order)?;
        let root = graph.root_index()?;

        if let Some(id) = graph.find_cycle() {
            return Err(MalformedReason::Cycle(id).into());
        }

        let mut visited = vec![false; graph.len()];
        visited[root] = true;
        let mut placed = 1;

        let mut levels = vec![vec![root]];

        // The newest tier is the frontier; the walk stops once it has no feeders.
        while let Some(frontier) = levels.last() {
            if levels.len() > graph.len() {
                return Err(MalformedReason::TraversalLimit(graph.len()).into());
            }

            let mut next = Vec::new();
            for &target in frontier {
                let feeders = graph
                    .winner_feeders(target)
                    .iter()
                    .chain(graph.loser_feeders(target));

                for &feeder in feeders {
                    if visited[feeder] {
                        match self.config.shared_feeders {
                            SharedFeederPolicy::Reject => {
                                return Err(MalformedReason::MultiplePaths(graph.get(feeder).id)
                                    .into());
                            }
                            SharedFeederPolicy::Nearest => continue,
                        }
                    }
                    visited[feeder] = true;
                    placed += 1;
                    next.push(feeder);
                }
            }

            if next.is_empty() {
                break;
            }
            levels.push(next);
        }

        if placed < graph.len() {
            let mut unreachable: Vec<_> = visited
                .iter()
                .enumerate()
                .filter(|&(_, &seen)| !seen)
                .map(|(idx, _)| graph.get(idx).id)
                .collect();
            unreachable.sort_unstable();
            return Err(MalformedReason::Unreachable(unreachable).into());
        }

        log::debug!(
            "Resolved {} matches into {} tiers (final: {})",
            graph.len(),
            levels.len(),
            graph.get(root).id
        );

        Ok(Tiers::new(
            levels
                .into_iter()
                .map(|level| level.into_iter().map(|idx| graph.get(idx)).collect())
                .collect(),
        ))
    }
}

/// Resolve `matches` with the default configuration
pub fn resolve_tiers(matches: &[Match]) -> BracketResult<Tiers<'_>> {
    TierResolver::default().resolve(matches)
}
