//! Single-source shortest path with early exit at the target.
//!
//! Plain binary heap with duplicate entries; a popped entry is discarded when
//! its distance is worse than the one recorded for the node (lazy deletion).
//! Entries are ordered by `(distance, node id)`, and a predecessor is only
//! replaced on a strict improvement, so a given snapshot always produces the
//! same path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use fastpath_config::RoutingConfig;
use fastpath_core::error::RouteError;
use tracing::{debug, error};

use crate::network::RoadNetwork;

/// Per-query resource limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Successful relaxations allowed before giving up. `None` is unbounded.
    pub max_relaxations: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_relaxations(max: usize) -> Self {
        Self {
            max_relaxations: Some(max),
        }
    }
}

impl From<&RoutingConfig> for SearchLimits {
    fn from(config: &RoutingConfig) -> Self {
        Self::with_max_relaxations(config.max_relaxations)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub pops: usize,
    pub stale_pops: usize,
    pub relaxations: usize,
}

pub struct ShortestPathSearch<'a> {
    network: &'a RoadNetwork,
    limits: SearchLimits,
}

impl<'a> ShortestPathSearch<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self {
            network,
            limits: SearchLimits::unbounded(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run until `target` is settled or the queue drains.
    pub fn run(&self, source: &'a str, target: &'a str) -> Result<SearchOutcome<'a>, RouteError> {
        let mut outcome = SearchOutcome {
            source,
            target,
            distances: HashMap::from([(source, 0)]),
            predecessors: HashMap::new(),
            stats: SearchStats::default(),
        };

        if source == target {
            return Ok(outcome);
        }

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0u64, source)));

        while let Some(Reverse((distance, node))) = queue.pop() {
            outcome.stats.pops += 1;

            if outcome.distances.get(node).is_some_and(|&best| distance > best) {
                outcome.stats.stale_pops += 1;
                continue;
            }

            // Non-negative weights: the first current pop of the target is final.
            if node == target {
                debug!(
                    source,
                    target,
                    distance,
                    pops = outcome.stats.pops,
                    stale = outcome.stats.stale_pops,
                    relaxations = outcome.stats.relaxations,
                    "target settled"
                );
                return Ok(outcome);
            }

            for road in self.network.outgoing(node) {
                let candidate = distance + u64::from(road.weight);
                let improves = outcome
                    .distances
                    .get(road.target.as_str())
                    .map_or(true, |&current| candidate < current);
                if !improves {
                    continue;
                }

                if let Some(limit) = self.limits.max_relaxations {
                    if outcome.stats.relaxations >= limit {
                        return Err(RouteError::SearchBudgetExceeded { limit });
                    }
                }
                outcome.stats.relaxations += 1;

                outcome.distances.insert(road.target.as_str(), candidate);
                outcome.predecessors.insert(road.target.as_str(), node);
                queue.push(Reverse((candidate, road.target.as_str())));
            }
        }

        debug!(
            source,
            target,
            pops = outcome.stats.pops,
            relaxations = outcome.stats.relaxations,
            "queue drained without reaching target"
        );
        Err(RouteError::NoRouteFound {
            origin: source.to_string(),
            destination: target.to_string(),
        })
    }
}

/// Distances and predecessor links of a search that reached its target.
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    source: &'a str,
    target: &'a str,
    distances: HashMap<&'a str, u64>,
    predecessors: HashMap<&'a str, &'a str>,
    stats: SearchStats,
}

impl<'a> SearchOutcome<'a> {
    /// Best known distance from the source, `None` if never reached.
    pub fn distance(&self, node: &str) -> Option<u64> {
        self.distances.get(node).copied()
    }

    pub fn target_distance(&self) -> u64 {
        self.distance(self.target).unwrap_or_default()
    }

    pub fn predecessor(&self, node: &str) -> Option<&'a str> {
        self.predecessors.get(node).copied()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Node ids from source to target, inclusive.
    ///
    /// Fails with [`RouteError::PredecessorChainBroken`] if the backward walk
    /// stops anywhere but the source or revisits a node.
    pub fn reconstruct_path(&self) -> Result<Vec<String>, RouteError> {
        let mut current = self.target;
        let mut path = vec![current.to_string()];
        let mut visited = HashSet::from([current]);

        while let Some(previous) = self.predecessor(current) {
            if !visited.insert(previous) {
                return Err(self.broken_at(previous));
            }
            path.push(previous.to_string());
            current = previous;
        }

        if current != self.source {
            return Err(self.broken_at(current));
        }

        path.reverse();
        Ok(path)
    }

    fn broken_at(&self, at: &str) -> RouteError {
        error!(
            source = self.source,
            target = self.target,
            at,
            "predecessor chain is corrupt"
        );
        RouteError::PredecessorChainBroken {
            origin: self.source.to_string(),
            destination: self.target.to_string(),
            at: at.to_string(),
        }
    }
}
