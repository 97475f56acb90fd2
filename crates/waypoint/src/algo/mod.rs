//! Shortest-path algorithms over a [`Graph`](crate::Graph).
//!
//! - [`dijkstra`]: single source, O(n²) label setting
//! - [`floyd`]: all pairs, O(n³), with a hint matrix for path reconstruction
//! - [`path`]: node-level path queries built on the Floyd-Warshall state
//!
//! All algorithms assume non-negative weights, which [`Graph::add_edge`]
//! enforces.
//!
//! [`Graph::add_edge`]: crate::Graph::add_edge

pub mod dijkstra;
pub mod floyd;
pub mod path;
