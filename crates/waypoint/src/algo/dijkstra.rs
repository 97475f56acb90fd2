//! Single-source shortest paths (Dijkstra).
//!
//! Label-setting over non-negative weights with a linear minimum scan, which
//! is O(n²) and fits the dense matrix storage better than a heap. The source
//! is settled up front; its direct neighbors start at their edge weight.
//!
//! The source always has distance 0, whatever slot it occupies.

use crate::error::Result;
use crate::graph::storage::Storage;
use crate::graph::Graph;
use tracing::debug;

/// Distances from one source to every node, indexed by slot.
#[derive(Debug, Clone)]
pub struct ShortestDistances<'a, T> {
    graph: &'a Graph<T>,
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl<T: PartialEq> Graph<T> {
    /// Minimal distance from `source` to every node.
    ///
    /// Unreachable nodes get `f64::INFINITY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source`
    /// is not in the graph.
    pub fn dijkstra(&self, source: &T) -> Result<ShortestDistances<'_, T>> {
        let source = self.require(source)?;
        let (distances, predecessors) = dijkstra_slots(self.storage(), source);

        debug!(
            source,
            reachable = distances.iter().filter(|d| d.is_finite()).count(),
            "dijkstra finished"
        );

        Ok(ShortestDistances {
            graph: self,
            source,
            distances,
            predecessors,
        })
    }
}

pub(crate) fn dijkstra_slots<T>(
    storage: &Storage<T>,
    source: usize,
) -> (Vec<f64>, Vec<Option<usize>>) {
    let n = storage.len();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut settled = vec![false; n];

    settled[source] = true;
    distances[source] = 0.0;
    for target in (0..n).filter(|&t| t != source) {
        if let Some(weight) = storage.edge(source, target) {
            distances[target] = weight;
            predecessors[target] = Some(source);
        }
    }

    while let Some(current) = closest_unsettled(&distances, &settled) {
        settled[current] = true;
        for target in (0..n).filter(|&t| !settled[t]) {
            let Some(weight) = storage.edge(current, target) else {
                continue;
            };
            let candidate = distances[current] + weight;
            if candidate < distances[target] {
                distances[target] = candidate;
                predecessors[target] = Some(current);
            }
        }
    }

    (distances, predecessors)
}

/// Unsettled slot with the smallest finite distance; ties go to the lowest slot.
fn closest_unsettled(distances: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (slot, &distance) in distances.iter().enumerate() {
        if settled[slot] || !distance.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, min)| distance < min) {
            best = Some((slot, distance));
        }
    }
    best.map(|(slot, _)| slot)
}

impl<'a, T> ShortestDistances<'a, T> {
    /// The source node.
    #[must_use]
    pub fn source(&self) -> &'a T {
        &self.graph.nodes()[self.source]
    }

    /// Slot of the source node at the time of the computation.
    #[must_use]
    pub fn source_slot(&self) -> usize {
        self.source
    }

    /// Distances indexed by slot.
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance to the node in `slot`.
    #[must_use]
    pub fn distance(&self, slot: usize) -> Option<f64> {
        self.distances.get(slot).copied()
    }

    /// Previous slot on a shortest path to `slot`.
    ///
    /// `None` for the source and for unreachable slots.
    #[must_use]
    pub fn predecessor(&self, slot: usize) -> Option<usize> {
        self.predecessors.get(slot).copied().flatten()
    }

    /// `(node, distance)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a T, f64)> + '_ {
        self.graph.nodes().iter().zip(self.distances.iter().copied())
    }
}

impl<'a, T: PartialEq> ShortestDistances<'a, T> {
    /// Distance to `node`, or `None` if it is not in the graph.
    #[must_use]
    pub fn distance_to(&self, node: &T) -> Option<f64> {
        self.graph.slot_of(node).map(|slot| self.distances[slot])
    }

    /// Nodes on a shortest path from the source to `node`, both included.
    ///
    /// `None` if `node` is absent or unreachable.
    #[must_use]
    pub fn path_to(&self, node: &T) -> Option<Vec<&'a T>> {
        let target = self.graph.slot_of(node)?;
        if !self.distances[target].is_finite() {
            return None;
        }

        let nodes = self.graph.nodes();
        let mut path = vec![&nodes[target]];
        let mut current = target;
        while let Some(previous) = self.predecessors[current] {
            path.push(&nodes[previous]);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}
