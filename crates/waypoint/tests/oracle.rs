//! Property tests comparing waypoint against petgraph's Dijkstra.
//!
//! Random graphs are built with integer weights so that distances summed in
//! different orders still compare exactly.

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use waypoint::{Graph, PathOutcome};

/// Node count plus a list of `(source, target, weight)` edges.
fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u32..20), 0..n * n),
        )
    })
}

fn build(n: usize, edges: &[(usize, usize, u32)]) -> Graph<usize> {
    let mut graph = Graph::with_capacity(n);
    for node in 0..n {
        graph.add_node(node).unwrap();
    }
    for &(source, target, weight) in edges {
        graph.add_edge(&source, &target, f64::from(weight)).unwrap();
    }
    graph
}

/// The same graph in petgraph form, node indices equal to slots.
fn reference(graph: &Graph<usize>) -> DiGraph<usize, f64> {
    let mut reference = DiGraph::new();
    for &node in graph.nodes() {
        reference.add_node(node);
    }
    for edge in graph.edges() {
        let source = graph.slot_of(edge.source).unwrap();
        let target = graph.slot_of(edge.target).unwrap();
        reference.add_edge(NodeIndex::new(source), NodeIndex::new(target), edge.weight);
    }
    reference
}

fn reference_distances(reference: &DiGraph<usize, f64>, source: usize) -> HashMap<NodeIndex, f64> {
    dijkstra(reference, NodeIndex::new(source), None, |e| *e.weight())
}

proptest! {
    #[test]
    fn dijkstra_matches_reference((n, edges) in arb_graph(), source_seed in any::<usize>()) {
        let graph = build(n, &edges);
        let source = source_seed % n;
        let expected = reference_distances(&reference(&graph), source);

        let actual = graph.dijkstra(&source).unwrap();
        for slot in 0..n {
            let distance = actual.distance(slot).unwrap();
            match expected.get(&NodeIndex::new(slot)) {
                Some(&want) => prop_assert_eq!(distance, want),
                None => prop_assert!(distance.is_infinite()),
            }
        }
    }

    #[test]
    fn floyd_matches_reference((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let reference = reference(&graph);
        let floyd = graph.floyd();

        for i in 0..n {
            let expected = reference_distances(&reference, i);
            for j in 0..n {
                let distance = floyd.distance(i, j).unwrap();
                prop_assert!(distance >= 0.0);
                match expected.get(&NodeIndex::new(j)) {
                    Some(&want) => prop_assert_eq!(distance, want),
                    None => prop_assert!(distance.is_infinite()),
                }
                prop_assert_eq!(floyd.exists_path(i, j), distance.is_finite());
            }
        }
    }

    #[test]
    fn reconstructed_paths_follow_edges((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let floyd = graph.floyd();

        for origin in 0..n {
            for destination in 0..n {
                let outcome = graph.shortest_path_between(&origin, &destination);
                let distance = floyd.distance(origin, destination).unwrap();

                let path = match outcome {
                    PathOutcome::Found(path) => path,
                    PathOutcome::Unreachable => {
                        prop_assert!(distance.is_infinite());
                        continue;
                    }
                    PathOutcome::NotFound => {
                        return Err(TestCaseError::fail("both endpoints exist"));
                    }
                };

                prop_assert_eq!(path.total_cost(), distance);
                let steps = path.steps();
                prop_assert_eq!(*steps[0].node, origin);
                prop_assert_eq!(*steps[steps.len() - 1].node, destination);
                for pair in steps.windows(2) {
                    let weight = graph.edge_weight(pair[0].node, pair[1].node);
                    prop_assert_eq!(weight, Ok(pair[1].cost - pair[0].cost));
                }
            }
        }
    }

    #[test]
    fn removal_then_readd_drops_incident_edges(
        (n, edges) in arb_graph(),
        victim_seed in any::<usize>(),
    ) {
        let mut graph = build(n, &edges);
        let victim = victim_seed % n;
        let survivors_before: Vec<_> = graph
            .edges()
            .filter(|e| *e.source != victim && *e.target != victim)
            .map(|e| (*e.source, *e.target, e.weight))
            .collect();

        graph.remove_node(&victim).unwrap();
        graph.add_node(victim).unwrap();

        let mut after: Vec<_> = graph.edges().map(|e| (*e.source, *e.target, e.weight)).collect();
        let mut before = survivors_before;
        after.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        before.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        prop_assert_eq!(before, after);
    }
}
