//! Sparse proximity edges.
//!
//! Connects projected nodes whose Euclidean distance is strictly below a
//! threshold. The default [`EdgePolicy::Consecutive`] only looks at scan
//! neighbours `(i, i + 1)`, so a scan of `n` readings yields at most `n - 1`
//! edges. [`EdgePolicy::AllPairs`] tests every `i < j` pair.

use serde::{Deserialize, Serialize};

use crate::core::Node;
use crate::error::{GraphError, Result};

/// Default proximity threshold (same unit as the readings).
pub const DEFAULT_MAX_EDGE_DISTANCE: f64 = 1.0;

/// Weighted undirected edge between two node indices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Lower node index
    pub from: usize,
    /// Higher node index
    pub to: usize,
    /// Euclidean distance between the endpoints
    pub weight: f64,
}

impl Edge {
    /// Create a new edge
    #[inline]
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Edge as a `(from, to, weight)` tuple
    #[inline]
    pub fn to_tuple(self) -> (usize, usize, f64) {
        (self.from, self.to, self.weight)
    }
}

/// Which node pairs are tested against the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Only scan neighbours `(i, i + 1)`
    #[default]
    Consecutive,
    /// Every pair `i < j`, ordered by `i` then `j`
    AllPairs,
}

/// Builds the sparse edge list from projected nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProximityEdgeBuilder {
    max_distance: f64,
    policy: EdgePolicy,
}

impl Default for ProximityEdgeBuilder {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_EDGE_DISTANCE,
            policy: EdgePolicy::Consecutive,
        }
    }
}

impl ProximityEdgeBuilder {
    /// Create a builder with the given threshold and policy.
    pub fn new(max_distance: f64, policy: EdgePolicy) -> Self {
        Self {
            max_distance,
            policy,
        }
    }

    /// Set the proximity threshold.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Set the edge policy.
    pub fn with_policy(mut self, policy: EdgePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Proximity threshold.
    #[inline]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Edge policy.
    #[inline]
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Reject thresholds that cannot produce meaningful edges.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(GraphError::invalid(format!(
                "max edge distance must be finite and positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }

    /// Whether two nodes are close enough to be connected.
    #[inline]
    pub fn connects(&self, a: &Node, b: &Node) -> Option<f64> {
        let d = a.distance(b);
        (d < self.max_distance).then_some(d)
    }

    /// Qualifying edges in policy order, computed lazily.
    pub fn edges<'a>(&'a self, nodes: &'a [Node]) -> Box<dyn Iterator<Item = Edge> + 'a> {
        match self.policy {
            EdgePolicy::Consecutive => Box::new(
                nodes
                    .windows(2)
                    .enumerate()
                    .filter_map(move |(i, pair)| {
                        self.connects(&pair[0], &pair[1])
                            .map(|d| Edge::new(i, i + 1, d))
                    }),
            ),
            EdgePolicy::AllPairs => Box::new((0..nodes.len()).flat_map(move |i| {
                ((i + 1)..nodes.len()).filter_map(move |j| {
                    self.connects(&nodes[i], &nodes[j])
                        .map(|d| Edge::new(i, j, d))
                })
            })),
        }
    }

    /// Build the edge list without a capacity limit.
    pub fn build(&self, nodes: &[Node]) -> Vec<Edge> {
        self.edges(nodes).collect()
    }

    /// Build the edge list into `out`, which is cleared first.
    ///
    /// Fails with [`GraphError::CapacityExceeded`] once more than `capacity`
    /// edges qualify; `out` then holds the first `capacity` edges and must be
    /// discarded by the caller.
    pub fn build_into(
        &self,
        nodes: &[Node],
        out: &mut Vec<Edge>,
        capacity: usize,
    ) -> Result<()> {
        out.clear();

        let mut candidates = self.edges(nodes);
        while let Some(edge) = candidates.next() {
            if out.len() >= capacity {
                return Err(GraphError::CapacityExceeded {
                    required: out.len() + 1 + candidates.count(),
                    capacity,
                });
            }
            log::trace!("edge {} -> {} (d = {:.4})", edge.from, edge.to, edge.weight);
            out.push(edge);
        }

        Ok(())
    }
}
