//! All-pairs shortest paths (Floyd-Warshall).
//!
//! Produces a dense distance matrix plus a hint matrix from which concrete
//! paths are rebuilt. A hint says how the best `i -> j` path was found:
//!
//! - [`Hint::NoPath`]: no path (or `i == j`)
//! - [`Hint::Direct`]: the edge `i -> j` itself is the best path
//! - [`Hint::Via(k)`](Hint::Via): best path is best(`i -> k`) followed by best(`k -> j`)
//!
//! Path existence and reconstruction walk the hints with an explicit stack,
//! so long paths do not grow the call stack.

use crate::graph::Graph;
use crate::matrix::Matrix;
use tracing::debug;

/// How the best path between two slots is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// No path, or the trivial path from a slot to itself.
    NoPath,
    /// A direct edge realizes the best path.
    Direct,
    /// The best path passes through this intermediate slot.
    Via(usize),
}

/// Result of a Floyd-Warshall run over the occupied slots of a graph.
#[derive(Debug, Clone)]
pub struct FloydWarshall {
    distances: Matrix<f64>,
    hints: Matrix<Hint>,
    version: u64,
}

impl<T> Graph<T> {
    /// Run Floyd-Warshall over the current graph.
    ///
    /// O(n³) in the number of nodes. The result is a snapshot: it is not
    /// updated by later mutations and its slot numbers refer to the graph as
    /// it was when this was called.
    #[must_use]
    pub fn floyd(&self) -> FloydWarshall {
        FloydWarshall::compute(self)
    }
}

impl FloydWarshall {
    fn compute<T>(graph: &Graph<T>) -> Self {
        let storage = graph.storage();
        let n = storage.len();
        let mut distances = Matrix::filled(n, f64::INFINITY);
        let mut hints = Matrix::filled(n, Hint::NoPath);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    distances[(i, j)] = 0.0;
                } else if let Some(weight) = storage.edge(i, j) {
                    distances[(i, j)] = weight;
                    hints[(i, j)] = Hint::Direct;
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let through_k = distances[(i, k)];
                if !through_k.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + distances[(k, j)];
                    if candidate < distances[(i, j)] {
                        distances[(i, j)] = candidate;
                        hints[(i, j)] = Hint::Via(k);
                    }
                }
            }
        }

        debug!(nodes = n, version = graph.version(), "floyd-warshall computed");
        Self {
            distances,
            hints,
            version: graph.version(),
        }
    }

    /// Number of slots covered.
    #[must_use]
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Graph version this result was computed from.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The distance matrix: 0 on the diagonal, infinity where unreachable.
    #[must_use]
    pub fn distances(&self) -> &Matrix<f64> {
        &self.distances
    }

    /// The hint matrix.
    #[must_use]
    pub fn hints(&self) -> &Matrix<Hint> {
        &self.hints
    }

    /// Shortest distance between two slots.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.distances.get(from, to).copied()
    }

    /// Hint for the pair `(from, to)`.
    #[must_use]
    pub fn hint(&self, from: usize, to: usize) -> Option<Hint> {
        self.hints.get(from, to).copied()
    }

    /// Hint in slot form: `Some(from)` for a direct edge, `Some(k)` for an
    /// intermediate slot, `None` for no path.
    #[must_use]
    pub fn hint_slot(&self, from: usize, to: usize) -> Option<usize> {
        match self.hint(from, to)? {
            Hint::NoPath => None,
            Hint::Direct => Some(from),
            Hint::Via(k) => Some(k),
        }
    }

    /// Returns `true` if a path leads from slot `from` to slot `to`.
    ///
    /// Every slot reaches itself. Out-of-range slots reach nothing.
    #[must_use]
    pub fn exists_path(&self, from: usize, to: usize) -> bool {
        let n = self.size();
        if from >= n || to >= n {
            return false;
        }

        let mut pending = vec![(from, to)];
        while let Some((i, j)) = pending.pop() {
            if i == j {
                continue;
            }
            match self.hints[(i, j)] {
                Hint::Direct => {}
                Hint::Via(k) => {
                    pending.push((k, j));
                    pending.push((i, k));
                }
                Hint::NoPath => return false,
            }
        }
        true
    }

    /// Slots on the shortest path from `from` to `to`, each paired with the
    /// cumulative cost of reaching it.
    ///
    /// The first entry is `(from, 0.0)`. Returns `None` if there is no path
    /// or a slot is out of range.
    #[must_use]
    pub fn reconstruct(&self, from: usize, to: usize) -> Option<Vec<(usize, f64)>> {
        let n = self.size();
        if from >= n || to >= n {
            return None;
        }

        let mut steps = vec![(from, 0.0)];
        let mut cost = 0.0;
        // segments are popped in path order: left half before right half
        let mut pending = vec![(from, to)];
        while let Some((i, j)) = pending.pop() {
            if i == j {
                continue;
            }
            match self.hints[(i, j)] {
                Hint::Direct => {
                    cost += self.distances[(i, j)];
                    steps.push((j, cost));
                }
                Hint::Via(k) => {
                    pending.push((k, j));
                    pending.push((i, k));
                }
                Hint::NoPath => return None,
            }
        }
        Some(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Graph<&'static str> {
        let mut graph = Graph::with_capacity(4);
        for name in ["A", "B", "C"] {
            graph.add_node(name).unwrap();
        }
        graph.add_edge(&"A", &"B", 4.0).unwrap();
        graph.add_edge(&"B", &"C", 3.0).unwrap();
        graph.add_edge(&"A", &"C", 10.0).unwrap();
        graph
    }

    #[test]
    fn distances_and_hints() {
        let floyd = scenario().floyd();
        assert_eq!(floyd.size(), 3);
        assert_eq!(floyd.distances().row(0), &[0.0, 4.0, 7.0]);
        assert_eq!(floyd.distances().row(1), &[f64::INFINITY, 0.0, 3.0]);
        assert_eq!(floyd.hint(0, 1), Some(Hint::Direct));
        assert_eq!(floyd.hint(0, 2), Some(Hint::Via(1)));
        assert_eq!(floyd.hint(1, 0), Some(Hint::NoPath));
        assert_eq!(floyd.hint(0, 0), Some(Hint::NoPath));
    }

    #[test]
    fn hint_slot_uses_legacy_encoding() {
        let floyd = scenario().floyd();
        assert_eq!(floyd.hint_slot(0, 1), Some(0));
        assert_eq!(floyd.hint_slot(0, 2), Some(1));
        assert_eq!(floyd.hint_slot(2, 0), None);
        assert_eq!(floyd.hint_slot(9, 0), None);
    }

    #[test]
    fn diagonal_ignores_self_loops() {
        let mut graph = scenario();
        graph.add_edge(&"A", &"A", 5.0).unwrap();
        assert_eq!(graph.floyd().distance(0, 0), Some(0.0));
    }

    #[test]
    fn exists_path_follows_hints() {
        let floyd = scenario().floyd();
        assert!(floyd.exists_path(0, 2));
        assert!(floyd.exists_path(2, 2));
        assert!(!floyd.exists_path(2, 0));
        assert!(!floyd.exists_path(0, 3));
    }

    #[test]
    fn reconstruct_splits_at_intermediates() {
        let floyd = scenario().floyd();
        assert_eq!(
            floyd.reconstruct(0, 2),
            Some(vec![(0, 0.0), (1, 4.0), (2, 7.0)])
        );
        assert_eq!(floyd.reconstruct(1, 1), Some(vec![(1, 0.0)]));
        assert_eq!(floyd.reconstruct(2, 0), None);
    }

    #[test]
    fn reconstruct_long_chain() {
        let len = 200;
        let mut graph = Graph::with_capacity(len);
        for n in 0..len {
            graph.add_node(n).unwrap();
        }
        for n in 1..len {
            graph.add_edge(&(n - 1), &n, 1.0).unwrap();
        }

        let floyd = graph.floyd();
        let steps = floyd.reconstruct(0, len - 1).unwrap();
        assert_eq!(steps.len(), len);
        assert!(steps.iter().enumerate().all(|(i, &(slot, _))| slot == i));
        assert_eq!(steps.last().map(|&(_, cost)| cost), Some(199.0));
    }

    #[test]
    fn empty_graph() {
        let graph: Graph<u32> = Graph::with_capacity(3);
        let floyd = graph.floyd();
        assert_eq!(floyd.size(), 0);
        assert!(!floyd.exists_path(0, 0));
    }
}
