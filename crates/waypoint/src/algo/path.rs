//! Path queries between two nodes.
//!
//! [`PathOutcome`] keeps apart the three answers a path query can give: an
//! endpoint is missing, both exist but are disconnected, or a path was found
//! (possibly with zero cost).

use std::fmt::{self, Display, Formatter};

use super::floyd::FloydWarshall;
use crate::graph::{format_weight, Graph, DEFAULT_PRECISION};
use tracing::debug;

/// A node on a path together with the cumulative cost of reaching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep<'a, T> {
    /// The node.
    pub node: &'a T,
    /// Cost from the origin up to and including this node.
    pub cost: f64,
}

/// A concrete shortest path, origin first.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<'a, T> {
    steps: Vec<PathStep<'a, T>>,
}

impl<'a, T> Path<'a, T> {
    /// Steps from origin to destination.
    #[must_use]
    pub fn steps(&self) -> &[PathStep<'a, T>] {
        &self.steps
    }

    /// Total cost of the path (0 for a trivial path).
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.steps.last().map_or(0.0, |step| step.cost)
    }

    /// Nodes on the path, origin first.
    pub fn nodes(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.steps.iter().map(|step| step.node)
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

impl<T: Display> Display for Path<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(
                f,
                "{} ({})",
                step.node,
                format_weight(step.cost, DEFAULT_PRECISION)
            )?;
        }
        Ok(())
    }
}

/// Answer to a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome<'a, T> {
    /// The origin or the destination is not in the graph.
    NotFound,
    /// Both nodes exist but no path connects them.
    Unreachable,
    /// The shortest path.
    Found(Path<'a, T>),
}

impl<'a, T> PathOutcome<'a, T> {
    /// Total cost: `None` if a node is missing, infinity if unreachable.
    #[must_use]
    pub fn total_cost(&self) -> Option<f64> {
        match self {
            Self::NotFound => None,
            Self::Unreachable => Some(f64::INFINITY),
            Self::Found(path) => Some(path.total_cost()),
        }
    }

    /// The path, if one was found.
    #[must_use]
    pub fn path(&self) -> Option<&Path<'a, T>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Returns `true` for [`PathOutcome::Found`].
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T: PartialEq> Graph<T> {
    /// Shortest path from `origin` to `destination`.
    ///
    /// Runs Floyd-Warshall from scratch on every call. Use a
    /// [`FloydCache`](crate::FloydCache) when issuing many queries against
    /// an unchanged graph.
    #[must_use]
    pub fn shortest_path_between(&self, origin: &T, destination: &T) -> PathOutcome<'_, T> {
        self.floyd().resolve(self, origin, destination)
    }

    /// Returns `true` if `destination` can be reached from `origin`.
    ///
    /// `false` if either node is absent.
    #[must_use]
    pub fn exists_path(&self, origin: &T, destination: &T) -> bool {
        match (self.slot_of(origin), self.slot_of(destination)) {
            (Some(i), Some(j)) => self.floyd().exists_path(i, j),
            _ => false,
        }
    }
}

impl FloydWarshall {
    /// Answer a path query against `graph`, which must be the graph this
    /// result was computed from, unchanged since.
    pub(crate) fn resolve<'g, T: PartialEq>(
        &self,
        graph: &'g Graph<T>,
        origin: &T,
        destination: &T,
    ) -> PathOutcome<'g, T> {
        debug_assert_eq!(self.version(), graph.version(), "stale floyd state");

        let (Some(i), Some(j)) = (graph.slot_of(origin), graph.slot_of(destination)) else {
            debug!("path query on missing node");
            return PathOutcome::NotFound;
        };

        if !self.exists_path(i, j) {
            debug!(from = i, to = j, "no path");
            return PathOutcome::Unreachable;
        }

        let Some(slots) = self.reconstruct(i, j) else {
            return PathOutcome::Unreachable;
        };
        let nodes = graph.nodes();
        let steps = slots
            .into_iter()
            .map(|(slot, cost)| PathStep {
                node: &nodes[slot],
                cost,
            })
            .collect();

        PathOutcome::Found(Path { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Graph<&'static str> {
        let mut graph = Graph::with_capacity(5);
        for name in ["A", "B", "C", "D"] {
            graph.add_node(name).unwrap();
        }
        graph.add_edge(&"A", &"B", 4.0).unwrap();
        graph.add_edge(&"B", &"C", 3.0).unwrap();
        graph.add_edge(&"A", &"C", 10.0).unwrap();
        graph
    }

    #[test]
    fn found_path_has_cumulative_costs() {
        let graph = scenario();
        let outcome = graph.shortest_path_between(&"A", &"C");
        let path = outcome.path().expect("path exists");

        let steps: Vec<_> = path.steps().iter().map(|s| (*s.node, s.cost)).collect();
        assert_eq!(steps, vec![("A", 0.0), ("B", 4.0), ("C", 7.0)]);
        assert_eq!(outcome.total_cost(), Some(7.0));
        assert_eq!(path.hops(), 2);
        assert_eq!(path.to_string(), "A (0)\tB (4)\tC (7)");
    }

    #[test]
    fn trivial_path_costs_zero() {
        let graph = scenario();
        let outcome = graph.shortest_path_between(&"D", &"D");
        assert_eq!(outcome.total_cost(), Some(0.0));
        assert_eq!(outcome.path().map(Path::hops), Some(0));
    }

    #[test]
    fn disconnected_nodes_are_unreachable() {
        let graph = scenario();
        let outcome = graph.shortest_path_between(&"C", &"A");
        assert_eq!(outcome, PathOutcome::Unreachable);
        assert_eq!(outcome.total_cost(), Some(f64::INFINITY));
        assert!(!graph.exists_path(&"C", &"A"));
    }

    #[test]
    fn missing_endpoints_are_not_found() {
        let graph = scenario();
        assert_eq!(graph.shortest_path_between(&"X", &"Y"), PathOutcome::NotFound);
        assert_eq!(graph.shortest_path_between(&"A", &"Y"), PathOutcome::NotFound);
        assert_eq!(graph.shortest_path_between(&"X", &"A"), PathOutcome::NotFound);
        assert_eq!(PathOutcome::<&str>::NotFound.total_cost(), None);
        assert!(!graph.exists_path(&"X", &"A"));
    }

    #[test]
    fn zero_cost_path_is_distinct_from_missing() {
        let mut graph = scenario();
        graph.add_edge(&"C", &"D", 0.0).unwrap();
        let outcome = graph.shortest_path_between(&"C", &"D");
        assert!(outcome.is_found());
        assert_eq!(outcome.total_cost(), Some(0.0));
    }
}
