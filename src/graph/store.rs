//! Sparse graph store for a live scan stream.
//!
//! [`GraphStore`] owns the node and edge buffers for one sensor. Storage is
//! sized once by [`GraphStore::initialize`]; every [`GraphStore::build_graph`]
//! call then replaces nodes and edges with the projection of the new scan.
//!
//! ## Rebuild Semantics
//!
//! ```text
//!   readings ──validate──► scratch nodes ──threshold──► scratch edges
//!                                                            │
//!                       success: swap scratch ◄──────────────┘
//!                       failure: store untouched
//! ```
//!
//! Builds never update incrementally and never leave a half-written graph.

use crate::config::GraphConfig;
use crate::core::{MIN_READINGS, Node, ScanProjector};
use crate::error::{GraphError, Result};

use super::edge::{Edge, ProximityEdgeBuilder};

/// Default multiplier from node count to edge capacity.
pub const DEFAULT_EDGE_CAPACITY_FACTOR: usize = 5;

/// Caller-owned storage for the sparse proximity graph of one scan.
///
/// # Example
///
/// ```rust
/// use vastu_graph::GraphStore;
///
/// let mut store = GraphStore::initialize(360).unwrap();
/// let readings = vec![2.0; 360];
///
/// let edges = store.build_graph(&readings).unwrap();
/// assert_eq!(edges.len(), 359);
///
/// let positions = store.node_positions().unwrap();
/// assert_eq!(positions.len(), 360);
/// ```
#[derive(Clone, Debug)]
pub struct GraphStore {
    num_nodes: usize,
    edge_capacity: usize,
    projector: ScanProjector,
    builder: ProximityEdgeBuilder,

    /// Readings of the last successful build
    ranges: Vec<f64>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Build targets, swapped in on success
    scratch_nodes: Vec<Node>,
    scratch_edges: Vec<Edge>,

    built: bool,
}

impl GraphStore {
    /// Allocate storage for `num_nodes` readings with the default geometry
    /// and threshold.
    pub fn initialize(num_nodes: usize) -> Result<Self> {
        Self::with_parts(
            num_nodes,
            ScanProjector::default(),
            ProximityEdgeBuilder::default(),
            DEFAULT_EDGE_CAPACITY_FACTOR,
        )
    }

    /// Allocate storage using projection and proximity settings from `config`.
    pub fn with_config(num_nodes: usize, config: &GraphConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GraphError::invalid(e.to_string()))?;
        Self::with_parts(
            num_nodes,
            ScanProjector::new(config.to_scan_geometry()),
            config.to_edge_builder(),
            config.proximity.edge_capacity_factor,
        )
    }

    /// Allocate storage from explicit components.
    ///
    /// Edge capacity is `num_nodes × capacity_factor`.
    pub fn with_parts(
        num_nodes: usize,
        projector: ScanProjector,
        builder: ProximityEdgeBuilder,
        capacity_factor: usize,
    ) -> Result<Self> {
        if capacity_factor == 0 {
            return Err(GraphError::invalid("edge capacity factor must be at least 1"));
        }
        projector.geometry().validate()?;
        builder.validate()?;
        let buffers = Buffers::allocate(num_nodes, capacity_factor)?;

        log::info!(
            "Initialized graph store: {} nodes, edge capacity {}",
            num_nodes,
            buffers.edge_capacity
        );

        Ok(Self {
            num_nodes,
            edge_capacity: buffers.edge_capacity,
            projector,
            builder,
            ranges: buffers.ranges,
            nodes: buffers.nodes,
            edges: buffers.edges,
            scratch_nodes: buffers.scratch_nodes,
            scratch_edges: buffers.scratch_edges,
            built: false,
        })
    }

    /// Re-size storage for a new node count, discarding the current graph.
    ///
    /// The edge capacity factor is preserved. On failure the store is
    /// unchanged.
    pub fn reinitialize(&mut self, num_nodes: usize) -> Result<()> {
        let factor = self.capacity_factor();
        let buffers = Buffers::allocate(num_nodes, factor)?;

        log::info!(
            "Reinitialized graph store: {} -> {} nodes, edge capacity {}",
            self.num_nodes,
            num_nodes,
            buffers.edge_capacity
        );

        self.num_nodes = num_nodes;
        self.edge_capacity = buffers.edge_capacity;
        self.ranges = buffers.ranges;
        self.nodes = buffers.nodes;
        self.edges = buffers.edges;
        self.scratch_nodes = buffers.scratch_nodes;
        self.scratch_edges = buffers.scratch_edges;
        self.built = false;
        Ok(())
    }

    /// Replace the graph with the proximity graph of `readings`.
    ///
    /// Returns the new edge list, ordered by source index. Fails with
    /// [`GraphError::InvalidInput`] for short, non-finite, negative or
    /// oversized scans and with [`GraphError::CapacityExceeded`] if the edge
    /// policy overflows the store. A failed build leaves the previous graph
    /// in place.
    pub fn build_graph(&mut self, readings: &[f64]) -> Result<&[Edge]> {
        if let Err(err) = self.rebuild(readings) {
            log::warn!("Rejected scan of {} readings: {}", readings.len(), err);
            return Err(err);
        }
        Ok(&self.edges)
    }

    fn rebuild(&mut self, readings: &[f64]) -> Result<()> {
        if readings.len() > self.num_nodes {
            return Err(GraphError::invalid(format!(
                "scan has {} readings but the store holds {} nodes",
                readings.len(),
                self.num_nodes
            )));
        }

        self.projector.project_into(readings, &mut self.scratch_nodes)?;
        self.builder.build_into(
            &self.scratch_nodes,
            &mut self.scratch_edges,
            self.edge_capacity,
        )?;

        std::mem::swap(&mut self.nodes, &mut self.scratch_nodes);
        std::mem::swap(&mut self.edges, &mut self.scratch_edges);
        self.ranges.clear();
        self.ranges.extend_from_slice(readings);
        self.built = true;

        log::debug!(
            "Built graph: {} readings, {} edges (threshold {:.3}, {:?})",
            readings.len(),
            self.edges.len(),
            self.builder.max_distance(),
            self.builder.policy()
        );
        Ok(())
    }

    /// Projected node positions of the last successful build, in index order.
    pub fn node_positions(&self) -> Result<Vec<(f64, f64)>> {
        self.ensure_built()?;
        Ok(self.nodes.iter().map(|n| n.to_tuple()).collect())
    }

    /// Projected nodes of the last build (empty before the first build).
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges of the last build (empty before the first build).
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Raw readings of the last successful build.
    pub fn ranges(&self) -> Result<&[f64]> {
        self.ensure_built()?;
        Ok(&self.ranges)
    }

    /// Number of edges in the current graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Maximum number of edges the store accepts.
    #[inline]
    pub fn edge_capacity(&self) -> usize {
        self.edge_capacity
    }

    /// Node count the store was sized for.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Whether at least one build has succeeded since (re)initialization.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Projector used for builds.
    #[inline]
    pub fn projector(&self) -> &ScanProjector {
        &self.projector
    }

    /// Edge builder used for builds.
    #[inline]
    pub fn edge_builder(&self) -> &ProximityEdgeBuilder {
        &self.builder
    }

    fn capacity_factor(&self) -> usize {
        self.edge_capacity / self.num_nodes
    }

    fn ensure_built(&self) -> Result<()> {
        if self.built {
            Ok(())
        } else {
            Err(GraphError::invalid("no scan has been built yet"))
        }
    }
}

/// Freshly allocated store buffers.
struct Buffers {
    edge_capacity: usize,
    ranges: Vec<f64>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    scratch_nodes: Vec<Node>,
    scratch_edges: Vec<Edge>,
}

impl Buffers {
    fn allocate(num_nodes: usize, capacity_factor: usize) -> Result<Self> {
        if num_nodes < MIN_READINGS {
            return Err(GraphError::invalid(format!(
                "graph needs at least {} nodes, got {}",
                MIN_READINGS, num_nodes
            )));
        }

        let edge_capacity = num_nodes
            .checked_mul(capacity_factor)
            .ok_or(GraphError::AllocationFailure { num_nodes })?;

        Ok(Self {
            edge_capacity,
            ranges: try_with_capacity(num_nodes, num_nodes)?,
            nodes: try_with_capacity(num_nodes, num_nodes)?,
            edges: try_with_capacity(edge_capacity, num_nodes)?,
            scratch_nodes: try_with_capacity(num_nodes, num_nodes)?,
            scratch_edges: try_with_capacity(edge_capacity, num_nodes)?,
        })
    }
}

pub(crate) fn try_with_capacity<T>(capacity: usize, num_nodes: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| GraphError::AllocationFailure { num_nodes })?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AngularSpacing, ScanGeometry};
    use crate::graph::EdgePolicy;
    use approx::assert_relative_eq;

    #[test]
    fn test_initialize() {
        let store = GraphStore::initialize(10).unwrap();
        assert_eq!(store.num_nodes(), 10);
        assert_eq!(store.edge_capacity(), 50);
        assert_eq!(store.edge_count(), 0);
        assert!(!store.is_built());
        assert!(store.nodes().is_empty());
    }

    #[test]
    fn test_initialize_rejects_small_graph() {
        for n in [0, 1] {
            assert!(matches!(
                GraphStore::initialize(n),
                Err(GraphError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_initialize_overflow_is_allocation_failure() {
        let err = GraphStore::initialize(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            GraphError::AllocationFailure {
                num_nodes: usize::MAX
            }
        );
    }

    #[test]
    fn test_positions_before_build() {
        let store = GraphStore::initialize(4).unwrap();
        assert!(matches!(
            store.node_positions(),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(store.ranges().is_err());
    }

    #[test]
    fn test_build_dense_arc() {
        // 0.1 m readings over 270°: neighbours are a few mm apart
        let mut store = GraphStore::initialize(100).unwrap();
        let edges = store.build_graph(&[0.1; 100]).unwrap().to_vec();

        assert_eq!(edges.len(), 99);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!((edge.from, edge.to), (i, i + 1));
        }
        assert_eq!(store.edge_count(), 99);
    }

    #[test]
    fn test_rebuild_replaces_edges() {
        let mut store = GraphStore::initialize(100).unwrap();
        store.build_graph(&[0.1; 100]).unwrap();
        assert_eq!(store.edge_count(), 99);

        // 50 m readings: neighbours ~2.4 m apart
        store.build_graph(&[50.0; 100]).unwrap();
        assert_eq!(store.edge_count(), 0);
        assert_relative_eq!(store.nodes()[0].norm(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejected_build_keeps_state() {
        let mut store = GraphStore::initialize(10).unwrap();
        store.build_graph(&[0.2; 10]).unwrap();
        let nodes = store.nodes().to_vec();
        let edges = store.edges().to_vec();

        let mut bad = vec![0.2; 10];
        bad[3] = f64::NAN;
        assert!(store.build_graph(&bad).is_err());
        assert!(store.build_graph(&[1.0]).is_err());
        assert!(store.build_graph(&[0.2; 11]).is_err());

        assert_eq!(store.nodes(), nodes.as_slice());
        assert_eq!(store.edges(), edges.as_slice());
        assert_eq!(store.ranges().unwrap(), &[0.2; 10]);
    }

    #[test]
    fn test_shorter_scan_accepted() {
        let mut store = GraphStore::initialize(10).unwrap();
        store.build_graph(&[0.2; 4]).unwrap();
        assert_eq!(store.node_positions().unwrap().len(), 4);
    }

    #[test]
    fn test_capacity_exceeded_keeps_state() {
        let builder = ProximityEdgeBuilder::default().with_policy(EdgePolicy::AllPairs);
        let mut store =
            GraphStore::with_parts(4, ScanProjector::default(), builder, 1).unwrap();

        // All four nodes at the origin: 6 pairs > capacity 4
        let err = store.build_graph(&[0.0; 4]).unwrap_err();
        assert_eq!(
            err,
            GraphError::CapacityExceeded {
                required: 6,
                capacity: 4
            }
        );
        assert!(!store.is_built());
        assert_eq!(store.edge_count(), 0);
    }

    #[test]
    fn test_weights_match_positions() {
        let mut store = GraphStore::initialize(50).unwrap();
        let readings: Vec<f64> = (0..50).map(|i| 0.5 + 0.01 * i as f64).collect();
        let edges = store.build_graph(&readings).unwrap().to_vec();
        let positions = store.node_positions().unwrap();

        assert!(!edges.is_empty());
        for edge in &edges {
            let (ax, ay) = positions[edge.from];
            let (bx, by) = positions[edge.to];
            assert_relative_eq!(edge.weight, (bx - ax).hypot(by - ay), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reinitialize() {
        let mut store = GraphStore::initialize(10).unwrap();
        store.build_graph(&[0.2; 10]).unwrap();

        store.reinitialize(20).unwrap();
        assert_eq!(store.num_nodes(), 20);
        assert_eq!(store.edge_capacity(), 100);
        assert!(!store.is_built());
        assert_eq!(store.edge_count(), 0);

        assert!(store.reinitialize(1).is_err());
        assert_eq!(store.num_nodes(), 20);

        store.build_graph(&[0.2; 20]).unwrap();
        assert_eq!(store.edge_count(), 19);
    }

    #[test]
    fn test_with_config() {
        let mut config = GraphConfig::default();
        config.scan.spacing = AngularSpacing::PerSample;
        config.proximity.max_edge_distance = 10.0;
        config.proximity.edge_capacity_factor = 2;

        let store = GraphStore::with_config(8, &config).unwrap();
        assert_eq!(store.edge_capacity(), 16);
        assert_eq!(store.edge_builder().max_distance(), 10.0);
        assert_eq!(
            *store.projector().geometry(),
            ScanGeometry::default().with_spacing(AngularSpacing::PerSample)
        );
    }

    #[test]
    fn test_with_config_rejects_non_finite_values() {
        let mut config = GraphConfig::default();
        config.proximity.max_edge_distance = f64::NAN;
        config.scan.field_of_view_deg = f64::NAN;

        let err = GraphStore::with_config(4, &config).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(_)));

        let mut config = GraphConfig::default();
        config.proximity.max_edge_distance = 0.0;
        assert!(matches!(
            GraphStore::with_config(4, &config),
            Err(GraphError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_with_parts_rejects_bad_threshold() {
        for bad in [f64::NAN, 0.0, -0.5] {
            let result = GraphStore::with_parts(
                4,
                ScanProjector::default(),
                ProximityEdgeBuilder::default().with_max_distance(bad),
                DEFAULT_EDGE_CAPACITY_FACTOR,
            );
            assert!(matches!(result, Err(GraphError::InvalidInput(_))), "{bad}");
        }
    }

    #[test]
    fn test_with_parts_rejects_bad_geometry() {
        for geometry in [
            ScanGeometry::new(f64::NAN, -135.0, AngularSpacing::Endpoints),
            ScanGeometry::new(0.0, -135.0, AngularSpacing::Endpoints),
            ScanGeometry::new(270.0, f64::INFINITY, AngularSpacing::Endpoints),
        ] {
            let result = GraphStore::with_parts(
                4,
                ScanProjector::new(geometry),
                ProximityEdgeBuilder::default(),
                DEFAULT_EDGE_CAPACITY_FACTOR,
            );
            assert!(
                matches!(result, Err(GraphError::InvalidInput(_))),
                "{geometry:?}"
            );
        }
    }
}
