//! Integration tests for the dense adjacency graph.

mod common;

use vastu_graph::{AdjacencyGraph, GraphError, GraphStore};

#[test]
fn test_ring_has_n_edges_regardless_of_distance() {
    for n in [3, 10, 360] {
        for scan in [
            common::constant_scan(n, 0.1),
            common::constant_scan(n, 1000.0),
            common::alternating_scan(n, 0.2, 30.0),
        ] {
            let mut graph = AdjacencyGraph::new(n).unwrap();
            graph.build_from_scan(&scan).unwrap();

            assert_eq!(graph.edge_count(), n);
            assert!(graph.has_edge(n - 1, 0));
            assert_eq!(graph.connected_components().len(), 1);
        }
    }
}

#[test]
fn test_three_reading_ring() {
    let mut graph = AdjacencyGraph::new(3).unwrap();
    graph.build_from_scan(&[2.0, 2.0, 2.0]).unwrap();

    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(2, 0));
    assert_eq!(graph.neighbors(1).unwrap(), vec![0, 2]);
}

#[test]
fn test_symmetry_under_random_mutation() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = AdjacencyGraph::new(12).unwrap();

    for _ in 0..500 {
        // Indices up to 14 exercise the out-of-range no-op path
        let a = rng.gen_range(0..15);
        let b = rng.gen_range(0..15);
        if rng.gen_bool(0.6) {
            graph.add_edge(a, b);
        } else {
            graph.remove_edge(a, b);
        }
    }

    for a in 0..12 {
        for b in 0..12 {
            assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
        }
        for &b in &graph.neighbors(a).unwrap() {
            assert!(graph.neighbors(b).unwrap().contains(&a));
        }
    }
}

#[test]
fn test_lookup_out_of_range() {
    let graph = AdjacencyGraph::new(4).unwrap();
    assert_eq!(
        graph.neighbors(4),
        Err(GraphError::IndexOutOfRange {
            index: 4,
            num_nodes: 4
        })
    );
}

#[test]
fn test_sparse_edges_into_dense_clusters() {
    // Two near arcs separated by far readings
    let mut readings = common::constant_scan(30, 0.5);
    for r in readings.iter_mut().skip(10).take(5) {
        *r = 40.0;
    }

    let mut store = GraphStore::initialize(30).unwrap();
    let edges = store.build_graph(&readings).unwrap();
    let graph = AdjacencyGraph::from_edges(30, edges).unwrap();

    let clusters: Vec<_> = graph
        .connected_components()
        .into_iter()
        .filter(|c| c.len() > 1)
        .collect();
    assert_eq!(clusters, vec![(0..10).collect::<Vec<_>>(), (15..30).collect()]);
}
