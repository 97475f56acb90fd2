//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use waypoint::Graph;

/// Route `tracing` output through the test harness (`RUST_LOG` controls it).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a graph with the given nodes and `(source, target, weight)` edges.
///
/// Capacity is the node count plus `spare`.
pub fn build_graph(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
    spare: usize,
) -> Graph<&'static str> {
    let mut graph = Graph::with_capacity(nodes.len() + spare);
    for node in nodes {
        graph.add_node(*node).expect("failed to add node");
    }
    for (source, target, weight) in edges {
        graph
            .add_edge(source, target, *weight)
            .expect("failed to add edge");
    }
    graph
}

/// The three-node example: A->B (4), B->C (3), A->C (10).
pub fn abc_graph() -> Graph<&'static str> {
    build_graph(
        &["A", "B", "C"],
        &[("A", "B", 4.0), ("B", "C", 3.0), ("A", "C", 10.0)],
        1,
    )
}
