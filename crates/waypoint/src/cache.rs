//! Floyd-Warshall state cached across queries.
//!
//! [`Graph::shortest_path_between`] recomputes all pairs on every call. A
//! [`FloydCache`] instead keeps the last result and recomputes only when the
//! graph's [version](Graph::version) has moved on.
//!
//! A cache is tied to one graph: versions of different graphs are not
//! comparable, so sharing a cache between graphs gives wrong answers.

use crate::algo::floyd::FloydWarshall;
use crate::algo::path::PathOutcome;
use crate::graph::Graph;
use tracing::{debug, trace};

/// Lazily recomputed Floyd-Warshall state for a single graph.
#[derive(Debug, Clone, Default)]
pub struct FloydCache {
    state: Option<FloydWarshall>,
}

impl FloydCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the cached state matches the current `graph`.
    #[must_use]
    pub fn is_fresh<T>(&self, graph: &Graph<T>) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| state.version() == graph.version())
    }

    /// Floyd-Warshall state for `graph`, recomputed if it changed.
    pub fn get<T>(&mut self, graph: &Graph<T>) -> &FloydWarshall {
        if self.is_fresh(graph) {
            trace!(version = graph.version(), "floyd cache hit");
        } else {
            debug!(version = graph.version(), "floyd cache miss");
            self.state = None;
        }
        self.state.get_or_insert_with(|| graph.floyd())
    }

    /// Shortest path using the cached state.
    pub fn shortest_path_between<'g, T: PartialEq>(
        &mut self,
        graph: &'g Graph<T>,
        origin: &T,
        destination: &T,
    ) -> PathOutcome<'g, T> {
        self.get(graph).resolve(graph, origin, destination)
    }

    /// Drop the cached state.
    pub fn invalidate(&mut self) {
        self.state = None;
    }
}
