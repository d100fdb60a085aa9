//! In-memory bracket graph for one tournament.
//!
//! Matches are held in an arena (the caller's slice) and parent ids are
//! resolved to arena indices once, so feeder lookups during the walk are
//! O(1) and never touch the host's storage.

use super::errors::{BracketError, BracketResult, MalformedReason};
use super::models::{Match, MatchId};
use crate::config::SiblingOrder;
use std::collections::HashMap;

/// Parent-pointer graph over a borrowed match snapshot
#[derive(Debug)]
pub struct BracketGraph<'a> {
    matches: &'a [Match],
    index: HashMap<MatchId, usize>,
    /// Resolved `[winner_parent, loser_parent]` per match
    parents: Vec<[Option<usize>; 2]>,
    winner_feeders: Vec<Vec<usize>>,
    loser_feeders: Vec<Vec<usize>>,
}

impl<'a> BracketGraph<'a> {
    /// Build the graph with feeders ordered by match id
    pub fn build(matches: &'a [Match]) -> BracketResult<Self> {
        Self::build_with_order(matches, SiblingOrder::ById)
    }

    /// Build the graph with an explicit feeder order
    ///
    /// # Errors
    ///
    /// Returns `TourneyMalformed` if two records share an id or a parent
    /// reference names a match outside the set.
    pub fn build_with_order(matches: &'a [Match], order: SiblingOrder) -> BracketResult<Self> {
        let mut index = HashMap::with_capacity(matches.len());
        for (idx, m) in matches.iter().enumerate() {
            if index.insert(m.id, idx).is_some() {
                return Err(MalformedReason::DuplicateMatch(m.id).into());
            }
        }

        let mut visit_order: Vec<usize> = (0..matches.len()).collect();
        if order == SiblingOrder::ById {
            visit_order.sort_by_key(|&idx| matches[idx].id);
        }

        let mut parents = vec![[None, None]; matches.len()];
        let mut winner_feeders = vec![Vec::new(); matches.len()];
        let mut loser_feeders = vec![Vec::new(); matches.len()];

        for idx in visit_order {
            let m = &matches[idx];
            for (slot, parent_id) in m.parents().into_iter().enumerate() {
                let Some(parent_id) = parent_id else {
                    continue;
                };
                let parent = *index
                    .get(&parent_id)
                    .ok_or(MalformedReason::UnknownParent {
                        match_id: m.id,
                        parent_id,
                    })?;

                parents[idx][slot] = Some(parent);
                if slot == 0 {
                    winner_feeders[parent].push(idx);
                } else {
                    loser_feeders[parent].push(idx);
                }
            }
        }

        Ok(Self {
            matches,
            index,
            parents,
            winner_feeders,
            loser_feeders,
        })
    }

    /// Number of matches in the graph
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True if the tournament has no matches
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Match record at an arena index
    pub fn get(&self, idx: usize) -> &'a Match {
        &self.matches[idx]
    }

    /// Arena index of a match id
    pub fn index_of(&self, id: MatchId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Find the final: the one match with neither parent set.
    ///
    /// # Errors
    ///
    /// * `NoRoot` - the set is empty
    /// * `AmbiguousRoot` - more than one parentless match
    /// * `TourneyMalformed` - matches exist but all of them have a parent
    pub fn find_root(&self) -> BracketResult<&'a Match> {
        self.root_index().map(|idx| self.get(idx))
    }

    pub(crate) fn root_index(&self) -> BracketResult<usize> {
        if self.is_empty() {
            return Err(BracketError::NoRoot);
        }

        let mut roots: Vec<usize> = self
            .matches
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_parentless())
            .map(|(idx, _)| idx)
            .collect();

        match roots.len() {
            0 => Err(MalformedReason::RootMissing.into()),
            1 => Ok(roots[0]),
            _ => {
                roots.sort_by_key(|&idx| self.matches[idx].id);
                Err(BracketError::AmbiguousRoot {
                    roots: roots.into_iter().map(|idx| self.matches[idx].id).collect(),
                })
            }
        }
    }

    /// Matches whose winners and losers (respectively) advance into `target`
    ///
    /// Returns two empty lists if `target` is not part of this graph.
    pub fn children_feeding_into(&self, target: &Match) -> (Vec<&'a Match>, Vec<&'a Match>) {
        match self.index_of(target.id) {
            Some(idx) => (
                self.winner_feeders(idx).iter().map(|&i| self.get(i)).collect(),
                self.loser_feeders(idx).iter().map(|&i| self.get(i)).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        }
    }

    pub(crate) fn winner_feeders(&self, idx: usize) -> &[usize] {
        &self.winner_feeders[idx]
    }

    pub(crate) fn loser_feeders(&self, idx: usize) -> &[usize] {
        &self.loser_feeders[idx]
    }

    /// Find a match that lies on a parent-pointer cycle.
    ///
    /// Iterative three-colour DFS along winner and loser parent edges. The
    /// lowest-id match that starts a walk into a cycle is tried first, so the
    /// reported id is stable for a given input.
    pub fn find_cycle(&self) -> Option<MatchId> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unseen,
            OnPath,
            Done,
        }

        let mut starts: Vec<usize> = (0..self.len()).collect();
        starts.sort_by_key(|&idx| self.matches[idx].id);

        let mut marks = vec![Mark::Unseen; self.len()];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in starts {
            if marks[start] != Mark::Unseen {
                continue;
            }
            marks[start] = Mark::OnPath;
            stack.push((start, 0));

            while let Some(&(node, edge)) = stack.last() {
                if edge == 2 {
                    marks[node] = Mark::Done;
                    stack.pop();
                    continue;
                }
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                let Some(next) = self.parents[node][edge] else {
                    continue;
                };
                match marks[next] {
                    Mark::OnPath => return Some(self.matches[next].id),
                    Mark::Unseen => {
                        marks[next] = Mark::OnPath;
                        stack.push((next, 0));
                    }
                    Mark::Done => {}
                }
            }
        }

        None
    }
}
