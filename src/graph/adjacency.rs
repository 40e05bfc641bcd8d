//! Dense undirected adjacency graph.
//!
//! [`AdjacencyGraph`] owns a square `num_nodes × num_nodes` boolean matrix
//! (row-major, flat storage) and keeps it symmetric: every mutation writes
//! both `[a][b]` and `[b][a]`.
//!
//! Mutations are permissive: [`add_edge`](AdjacencyGraph::add_edge) and
//! [`remove_edge`](AdjacencyGraph::remove_edge) silently ignore indices
//! outside `[0, num_nodes)`. Lookups are strict and return
//! [`GraphError::IndexOutOfRange`].
//!
//! ## Ring Seeding
//!
//! [`build_from_scan`](AdjacencyGraph::build_from_scan) treats a scan purely
//! as a cyclic ordering, with no distance test:
//!
//! ```text
//!   0 ── 1 ── 2 ── … ── n-1
//!   └──────────────────────┘   ring closure
//! ```

use std::collections::VecDeque;

use crate::core::{MIN_READINGS, validate_readings};
use crate::error::{GraphError, Result};

use super::edge::Edge;
use super::store::try_with_capacity;

/// Dense, explicitly mutable undirected graph over a fixed node count.
///
/// # Example
///
/// ```rust
/// use vastu_graph::AdjacencyGraph;
///
/// let mut graph = AdjacencyGraph::new(3).unwrap();
/// graph.build_from_scan(&[2.0, 2.0, 2.0]).unwrap();
///
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(0).unwrap(), vec![1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyGraph {
    num_nodes: usize,
    /// Row-major connectivity, `adjacency[a * num_nodes + b]`
    adjacency: Vec<bool>,
}

impl AdjacencyGraph {
    /// Allocate an edgeless graph over `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Result<Self> {
        if num_nodes < MIN_READINGS {
            return Err(GraphError::invalid(format!(
                "graph needs at least {} nodes, got {}",
                MIN_READINGS, num_nodes
            )));
        }

        let cells = num_nodes
            .checked_mul(num_nodes)
            .ok_or(GraphError::AllocationFailure { num_nodes })?;
        let mut adjacency = try_with_capacity(cells, num_nodes)?;
        adjacency.resize(cells, false);

        Ok(Self {
            num_nodes,
            adjacency,
        })
    }

    /// Build a graph from a sparse edge list.
    ///
    /// Edge weights are dropped; endpoints outside `[0, num_nodes)` are
    /// ignored like [`add_edge`](Self::add_edge).
    pub fn from_edges(num_nodes: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph = Self::new(num_nodes)?;
        for edge in edges {
            graph.add_edge(edge.from, edge.to);
        }
        Ok(graph)
    }

    /// Number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    fn in_range(&self, a: usize, b: usize) -> bool {
        a < self.num_nodes && b < self.num_nodes
    }

    #[inline]
    fn set(&mut self, a: usize, b: usize, value: bool) {
        self.adjacency[a * self.num_nodes + b] = value;
        self.adjacency[b * self.num_nodes + a] = value;
    }

    #[inline]
    fn row(&self, node: usize) -> &[bool] {
        let start = node * self.num_nodes;
        &self.adjacency[start..start + self.num_nodes]
    }

    fn check_index(&self, node: usize) -> Result<()> {
        if node < self.num_nodes {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: node,
                num_nodes: self.num_nodes,
            })
        }
    }

    /// Connect `src` and `dest`. No-op if either index is out of range.
    pub fn add_edge(&mut self, src: usize, dest: usize) {
        if self.in_range(src, dest) {
            self.set(src, dest, true);
        } else {
            log::trace!(
                "Ignoring add_edge({}, {}) on {} nodes",
                src,
                dest,
                self.num_nodes
            );
        }
    }

    /// Disconnect `src` and `dest`. No-op if either index is out of range.
    pub fn remove_edge(&mut self, src: usize, dest: usize) {
        if self.in_range(src, dest) {
            self.set(src, dest, false);
        } else {
            log::trace!(
                "Ignoring remove_edge({}, {}) on {} nodes",
                src,
                dest,
                self.num_nodes
            );
        }
    }

    /// Whether `a` and `b` are connected (false when out of range).
    #[inline]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.in_range(a, b) && self.adjacency[a * self.num_nodes + b]
    }

    /// Neighbours of `node` in ascending index order.
    pub fn neighbors(&self, node: usize) -> Result<Vec<usize>> {
        self.check_index(node)?;
        Ok(self
            .row(node)
            .iter()
            .enumerate()
            .filter_map(|(j, &connected)| connected.then_some(j))
            .collect())
    }

    /// Number of neighbours of `node`.
    pub fn degree(&self, node: usize) -> Result<usize> {
        self.check_index(node)?;
        Ok(self.row(node).iter().filter(|&&c| c).count())
    }

    /// Undirected edges as `(a, b)` with `a <= b`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.num_nodes).flat_map(move |a| {
            (a..self.num_nodes)
                .filter(move |&b| self.adjacency[a * self.num_nodes + b])
                .map(move |b| (a, b))
        })
    }

    /// Number of undirected edges (self loops count once).
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Remove every edge. The node count is kept.
    pub fn clear_edges(&mut self) {
        self.adjacency.fill(false);
    }

    /// Seed the graph from a scan: connect `(i, i + 1)` for every consecutive
    /// pair and close the ring with `(n - 1, 0)`.
    ///
    /// No distance threshold is applied. Existing edges are kept. The scan
    /// must have between 2 and `num_nodes` finite non-negative readings; for
    /// two readings the ring closure coincides with `(0, 1)`.
    pub fn build_from_scan(&mut self, readings: &[f64]) -> Result<()> {
        validate_readings(readings)?;
        let n = readings.len();
        if n > self.num_nodes {
            return Err(GraphError::invalid(format!(
                "scan has {} readings but the graph holds {} nodes",
                n, self.num_nodes
            )));
        }

        for i in 0..n - 1 {
            self.set(i, i + 1, true);
        }
        self.set(n - 1, 0, true);

        log::debug!("Seeded ring of {} nodes from scan", n);
        Ok(())
    }

    /// Connected components, ordered by smallest member.
    ///
    /// Members of each component are ascending. Isolated nodes form
    /// single-node components.
    pub fn connected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.num_nodes];
        let mut components = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..self.num_nodes {
            if visited[start] {
                continue;
            }

            visited[start] = true;
            queue.push_back(start);
            let mut component = Vec::new();

            while let Some(node) = queue.pop_front() {
                component.push(node);
                for (next, &connected) in self.row(node).iter().enumerate() {
                    if connected && !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components
    }
}
