//! Fixed-capacity slot storage.
//!
//! Nodes occupy slots `0..len` with no gaps. Edge presence and weight live in
//! two `capacity x capacity` matrices indexed by slot. Removing a node moves
//! the last occupied node into the freed slot (together with all of its
//! edges), so slot numbers are not stable across removals.

use crate::matrix::Matrix;

/// Slot arena backing a [`Graph`](super::Graph).
#[derive(Debug, Clone)]
pub(crate) struct Storage<T> {
    nodes: Vec<T>,
    capacity: usize,
    edges: Matrix<bool>,
    weights: Matrix<f64>,
}

impl<T> Storage<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
            edges: Matrix::filled(capacity, false),
            weights: Matrix::filled(capacity, 0.0),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity
    }

    pub(crate) fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub(crate) fn edge_matrix(&self) -> &Matrix<bool> {
        &self.edges
    }

    pub(crate) fn weight_matrix(&self) -> &Matrix<f64> {
        &self.weights
    }

    /// Append a node at the next free slot and return that slot.
    ///
    /// The caller must have checked `is_full` first.
    pub(crate) fn push(&mut self, node: T) -> usize {
        debug_assert!(!self.is_full(), "push into a full storage");
        let slot = self.nodes.len();
        self.nodes.push(node);
        self.clear_slot(slot);
        slot
    }

    /// Remove the node at `slot`, compacting by moving the last node into it.
    ///
    /// The last node's outgoing row, incoming column and self-loop are copied
    /// into `slot`; edges between the removed node and the last node are
    /// dropped. The vacated last slot is then cleared.
    pub(crate) fn swap_remove(&mut self, slot: usize) -> T {
        let last = self.nodes.len() - 1;

        if slot != last {
            for j in (0..last).filter(|&j| j != slot) {
                self.edges[(j, slot)] = self.edges[(j, last)];
                self.weights[(j, slot)] = self.weights[(j, last)];
                self.edges[(slot, j)] = self.edges[(last, j)];
                self.weights[(slot, j)] = self.weights[(last, j)];
            }
            self.edges[(slot, slot)] = self.edges[(last, last)];
            self.weights[(slot, slot)] = self.weights[(last, last)];
        }

        self.clear_slot(last);
        self.nodes.swap_remove(slot)
    }

    pub(crate) fn has_edge(&self, source: usize, target: usize) -> bool {
        self.edges[(source, target)]
    }

    /// Weight of the edge `source -> target`, if present.
    pub(crate) fn edge(&self, source: usize, target: usize) -> Option<f64> {
        self.has_edge(source, target).then(|| self.weights[(source, target)])
    }

    pub(crate) fn set_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.edges[(source, target)] = true;
        self.weights[(source, target)] = weight;
    }

    pub(crate) fn clear_edge(&mut self, source: usize, target: usize) {
        self.edges[(source, target)] = false;
        self.weights[(source, target)] = 0.0;
    }

    /// Reset row and column `slot` (self-loop included) to no-edge/zero-weight.
    fn clear_slot(&mut self, slot: usize) {
        for j in 0..=slot {
            self.clear_edge(slot, j);
            self.clear_edge(j, slot);
        }
    }
}

impl<T: PartialEq> Storage<T> {
    /// Linear scan for the slot holding `node`.
    pub(crate) fn position(&self, node: &T) -> Option<usize> {
        self.nodes.iter().position(|n| n == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_with(names: &[&'static str]) -> Storage<&'static str> {
        let mut storage = Storage::new(names.len() + 1);
        for name in names {
            storage.push(*name);
        }
        storage
    }

    #[test]
    fn push_assigns_consecutive_slots() {
        let mut storage = Storage::new(3);
        assert_eq!(storage.push("a"), 0);
        assert_eq!(storage.push("b"), 1);
        assert_eq!(storage.len(), 2);
        assert!(!storage.is_full());
        storage.push("c");
        assert!(storage.is_full());
    }

    #[test]
    fn swap_remove_moves_last_node_and_its_edges() {
        let mut storage = storage_with(&["a", "b", "c", "d"]);
        // d's edges in both directions plus its self-loop
        storage.set_edge(3, 0, 1.0);
        storage.set_edge(0, 3, 2.0);
        storage.set_edge(3, 3, 5.0);
        storage.set_edge(2, 3, 6.0);
        // edges touching b, which is removed
        storage.set_edge(0, 1, 9.0);
        storage.set_edge(1, 2, 9.0);
        storage.set_edge(3, 1, 9.0);

        let removed = storage.swap_remove(1);

        assert_eq!(removed, "b");
        assert_eq!(storage.nodes(), &["a", "d", "c"]);
        assert_eq!(storage.edge(1, 0), Some(1.0));
        assert_eq!(storage.edge(0, 1), Some(2.0));
        assert_eq!(storage.edge(1, 1), Some(5.0));
        assert_eq!(storage.edge(2, 1), Some(6.0));
        assert_eq!(storage.edge(1, 2), None);
    }

    #[test]
    fn swap_remove_clears_vacated_slot() {
        let mut storage = storage_with(&["a", "b", "c"]);
        storage.set_edge(2, 0, 1.0);
        storage.set_edge(0, 2, 1.0);
        storage.set_edge(2, 2, 1.0);

        storage.swap_remove(0);

        for j in 0..storage.capacity() {
            assert!(!storage.has_edge(2, j));
            assert!(!storage.has_edge(j, 2));
            assert_eq!(storage.weight_matrix()[(2, j)], 0.0);
        }
    }

    #[test]
    fn swap_remove_of_last_slot_only_clears_it() {
        let mut storage = storage_with(&["a", "b"]);
        storage.set_edge(0, 1, 3.0);
        storage.set_edge(1, 0, 4.0);
        storage.set_edge(0, 0, 1.0);

        assert_eq!(storage.swap_remove(1), "b");

        assert_eq!(storage.nodes(), &["a"]);
        assert_eq!(storage.edge(0, 0), Some(1.0));
        assert!(!storage.has_edge(0, 1));
        assert!(!storage.has_edge(1, 0));
    }

    #[test]
    fn clear_edge_zeroes_weight() {
        let mut storage = storage_with(&["a", "b"]);
        storage.set_edge(0, 1, 2.5);
        storage.clear_edge(0, 1);
        assert_eq!(storage.edge(0, 1), None);
        assert_eq!(storage.weight_matrix()[(0, 1)], 0.0);
    }
}
