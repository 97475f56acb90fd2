//! Error types for waypoint graph operations.
//!
//! Every failing operation is a no-op: when one of these errors is returned
//! the graph (and its version counter) is exactly as it was before the call.

use thiserror::Error;

/// The error type for graph mutations and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The node is already present in the graph.
    #[error("node already exists")]
    DuplicateNode,

    /// Every slot is occupied.
    #[error("graph is full (capacity {capacity})")]
    CapacityExceeded {
        /// Fixed node capacity of the graph.
        capacity: usize,
    },

    /// The requested capacity is above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[error("capacity {requested} exceeds the maximum of {max}")]
    CapacityTooLarge {
        /// Capacity asked for.
        requested: usize,
        /// Largest accepted capacity.
        max: usize,
    },

    /// A node (or one endpoint of an edge) is not in the graph.
    #[error("node not found")]
    NodeNotFound,

    /// Both endpoints exist but there is no edge between them.
    #[error("edge not found")]
    EdgeNotFound,

    /// Edge weights must be finite and non-negative.
    #[error("invalid edge weight {0}: weights must be finite and non-negative")]
    InvalidWeight(f64),
}

/// A specialized Result type for waypoint operations.
pub type Result<T> = std::result::Result<T, Error>;
