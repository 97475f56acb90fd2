//! A fixed-capacity directed, weighted graph with shortest-path queries.
//!
//! Nodes are any `PartialEq` value; edges are directed and carry finite,
//! non-negative `f64` weights. The graph offers:
//!
//! - node and edge CRUD with explicit [`Error`]s (every failure is a no-op)
//! - single-source distances via [`Graph::dijkstra`]
//! - all-pairs distances via [`Graph::floyd`], with path reconstruction
//! - node-level path queries via [`Graph::shortest_path_between`]
//! - a plain-text diagnostic dump through `Display`
//!
//! # Example
//!
//! ```
//! use waypoint::{Graph, PathOutcome};
//!
//! let mut graph = Graph::with_capacity(8);
//! for city in ["A", "B", "C"] {
//!     graph.add_node(city)?;
//! }
//! graph.add_edge(&"A", &"B", 4.0)?;
//! graph.add_edge(&"B", &"C", 3.0)?;
//! graph.add_edge(&"A", &"C", 10.0)?;
//!
//! let distances = graph.dijkstra(&"A")?;
//! assert_eq!(distances.distance_to(&"C"), Some(7.0));
//!
//! match graph.shortest_path_between(&"A", &"C") {
//!     PathOutcome::Found(path) => assert_eq!(path.to_string(), "A (0)\tB (4)\tC (7)"),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! # Ok::<(), waypoint::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod algo;
pub mod cache;
pub mod error;
pub mod graph;
pub mod matrix;

pub use algo::dijkstra::ShortestDistances;
pub use algo::floyd::{FloydWarshall, Hint};
pub use algo::path::{Path, PathOutcome, PathStep};
pub use cache::FloydCache;
pub use error::{Error, Result};
pub use graph::{EdgeRef, Graph, MAX_CAPACITY};
pub use matrix::Matrix;
