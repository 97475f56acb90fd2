//! The graph container: node and edge CRUD over slot storage.
//!
//! # Slots
//!
//! Every node occupies a slot in `0..len()`. Slots are assigned in insertion
//! order and are **not stable**: removing a node moves the node in the last
//! slot into the freed one. Callers should address nodes by value and treat
//! slot numbers (as exposed by [`Graph::slot_of`] and the algorithm results)
//! as valid only until the next mutation.
//!
//! # Edges
//!
//! Edges are directed and carry a finite, non-negative `f64` weight. Adding
//! an edge that already exists overwrites its weight. Self-loops are allowed.
//!
//! # Example
//!
//! ```
//! use waypoint::{Error, Graph};
//!
//! let mut graph = Graph::with_capacity(3);
//! graph.add_node("A")?;
//! graph.add_node("B")?;
//! graph.add_edge(&"A", &"B", 4.0)?;
//!
//! assert_eq!(graph.edge_weight(&"A", &"B"), Ok(4.0));
//! assert_eq!(graph.edge_weight(&"B", &"A"), Err(Error::EdgeNotFound));
//! assert_eq!(graph.edge_weight(&"A", &"Z"), Err(Error::NodeNotFound));
//! # Ok::<(), waypoint::Error>(())
//! ```

mod dump;
pub(crate) mod storage;

use crate::error::{Error, Result};
use crate::matrix::Matrix;
pub use dump::{format_weight, Dump, DEFAULT_PRECISION};
use storage::Storage;
use tracing::{debug, trace};

/// Largest node capacity a graph accepts.
///
/// Storage is two dense `capacity x capacity` matrices allocated up front, so
/// this bounds a graph at roughly 150 MB.
pub const MAX_CAPACITY: usize = 4096;

/// A directed, weighted graph holding at most `capacity` nodes.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    storage: Storage<T>,
    version: u64,
}

/// A present edge, as yielded by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRef<'a, T> {
    /// Source node.
    pub source: &'a T,
    /// Target node.
    pub target: &'a T,
    /// Edge weight.
    pub weight: f64,
}

impl<T> Graph<T> {
    /// Create an empty graph that can hold up to `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`]. Use
    /// [`try_with_capacity`](Self::try_with_capacity) for untrusted input.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty graph, rejecting capacities above [`MAX_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityTooLarge`] if `capacity > MAX_CAPACITY`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(Error::CapacityTooLarge {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            storage: Storage::new(capacity),
            version: 0,
        })
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Maximum number of nodes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns `true` if no further node can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// Structural version, bumped by every successful mutation.
    ///
    /// Derived state (such as a [`FloydCache`](crate::FloydCache)) compares
    /// this value to decide whether it must be recomputed.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Nodes in slot order.
    #[must_use]
    pub fn nodes(&self) -> &[T] {
        self.storage.nodes()
    }

    /// The node currently in `slot`.
    #[must_use]
    pub fn node_at(&self, slot: usize) -> Option<&T> {
        self.storage.nodes().get(slot)
    }

    /// Iterate over every present edge in row-major slot order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, T>> + '_ {
        let nodes = self.storage.nodes();
        (0..nodes.len()).flat_map(move |i| {
            (0..nodes.len()).filter_map(move |j| {
                self.storage.edge(i, j).map(|weight| EdgeRef {
                    source: &nodes[i],
                    target: &nodes[j],
                    weight,
                })
            })
        })
    }

    /// Raw edge-presence matrix (`capacity x capacity`).
    ///
    /// Only the top-left `len() x len()` block is meaningful.
    #[must_use]
    pub fn edge_matrix(&self) -> &Matrix<bool> {
        self.storage.edge_matrix()
    }

    /// Raw weight matrix (`capacity x capacity`).
    ///
    /// Only the top-left `len() x len()` block is meaningful, and a weight is
    /// only significant where [`edge_matrix`](Self::edge_matrix) is `true`.
    #[must_use]
    pub fn weight_matrix(&self) -> &Matrix<f64> {
        self.storage.weight_matrix()
    }

    pub(crate) fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<T: PartialEq> Graph<T> {
    /// Slot currently holding `node`.
    #[must_use]
    pub fn slot_of(&self, node: &T) -> Option<usize> {
        self.storage.position(node)
    }

    /// Returns `true` if `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &T) -> bool {
        self.slot_of(node).is_some()
    }

    /// Insert `node` at the next free slot and return that slot.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityExceeded`] if every slot is taken
    /// - [`Error::DuplicateNode`] if an equal node is already present
    pub fn add_node(&mut self, node: T) -> Result<usize> {
        if self.storage.is_full() {
            trace!(capacity = self.capacity(), "add_node rejected: graph is full");
            return Err(Error::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        if self.contains_node(&node) {
            trace!("add_node rejected: duplicate node");
            return Err(Error::DuplicateNode);
        }

        let slot = self.storage.push(node);
        self.bump_version();
        debug!(slot, len = self.len(), "node added");
        Ok(slot)
    }

    /// Remove `node` and every edge touching it, returning the stored value.
    ///
    /// The node in the last slot is moved into the freed slot, keeping its
    /// edges, so its slot number changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `node` is absent.
    pub fn remove_node(&mut self, node: &T) -> Result<T> {
        let slot = self.require(node)?;
        let last = self.len() - 1;

        let removed = self.storage.swap_remove(slot);
        self.bump_version();
        if slot == last {
            debug!(slot, "node removed");
        } else {
            debug!(slot, moved_from = last, "node removed, last slot relabeled");
        }
        Ok(removed)
    }

    /// Returns `true` if the directed edge `source -> target` exists.
    ///
    /// Also `false` when either endpoint is absent.
    #[must_use]
    pub fn contains_edge(&self, source: &T, target: &T) -> bool {
        self.edge_weight(source, target).is_ok()
    }

    /// Insert the directed edge `source -> target`, or overwrite its weight.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is absent
    /// - [`Error::InvalidWeight`] if `weight` is negative, NaN or infinite
    pub fn add_edge(&mut self, source: &T, target: &T, weight: f64) -> Result<()> {
        let (i, j) = self.require_pair(source, target)?;
        if !weight.is_finite() || weight < 0.0 {
            trace!(weight, "add_edge rejected: invalid weight");
            return Err(Error::InvalidWeight(weight));
        }

        self.storage.set_edge(i, j, weight);
        self.bump_version();
        debug!(source = i, target = j, weight, "edge set");
        Ok(())
    }

    /// Remove the directed edge `source -> target`, returning its weight.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is absent
    /// - [`Error::EdgeNotFound`] if there is no such edge
    pub fn remove_edge(&mut self, source: &T, target: &T) -> Result<f64> {
        let (i, j) = self.require_pair(source, target)?;
        let weight = self.storage.edge(i, j).ok_or(Error::EdgeNotFound)?;

        self.storage.clear_edge(i, j);
        self.bump_version();
        debug!(source = i, target = j, "edge removed");
        Ok(weight)
    }

    /// Weight of the directed edge `source -> target`.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either endpoint is absent
    /// - [`Error::EdgeNotFound`] if there is no such edge
    pub fn edge_weight(&self, source: &T, target: &T) -> Result<f64> {
        let (i, j) = self.require_pair(source, target)?;
        self.storage.edge(i, j).ok_or(Error::EdgeNotFound)
    }

    /// Outgoing edges of `node` as `(target, weight)` pairs in slot order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `node` is absent.
    pub fn neighbors(&self, node: &T) -> Result<impl Iterator<Item = (&T, f64)> + '_> {
        let i = self.require(node)?;
        let nodes = self.storage.nodes();
        Ok((0..nodes.len()).filter_map(move |j| self.storage.edge(i, j).map(|w| (&nodes[j], w))))
    }

    pub(crate) fn require(&self, node: &T) -> Result<usize> {
        self.slot_of(node).ok_or(Error::NodeNotFound)
    }

    fn require_pair(&self, source: &T, target: &T) -> Result<(usize, usize)> {
        Ok((self.require(source)?, self.require(target)?))
    }
}
