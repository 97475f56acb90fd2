//! Executes script commands against a graph of named nodes.
//!
//! A [`Session`] owns the graph and a [`FloydCache`], so a run of `path` and
//! `floyd` queries with no mutations in between computes all pairs once.
//! Every command yields a [`Response`] that the output layer renders.

use serde::Serialize;
use tracing::{debug, info};
use waypoint::{FloydCache, Graph, PathOutcome};

use crate::config::WaypointConfig;
use crate::script::Command;

/// A node paired with a distance; `None` means unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDistance {
    /// Node name.
    pub node: String,
    /// Distance, or `None` if unreachable.
    pub distance: Option<f64>,
}

/// Result of a path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathReport {
    /// An endpoint is not in the graph.
    NotFound,
    /// No path connects the endpoints.
    Unreachable,
    /// The shortest path with cumulative costs.
    Found {
        /// Total path cost.
        total_cost: f64,
        /// Nodes from origin to destination with cumulative cost.
        steps: Vec<NodeDistance>,
    },
}

/// What a successfully executed command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// A node was inserted.
    NodeAdded {
        /// Node name.
        node: String,
        /// Slot assigned to it.
        slot: usize,
    },
    /// A node was removed.
    NodeRemoved {
        /// Node name.
        node: String,
    },
    /// An edge was inserted or its weight overwritten.
    EdgeSet {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
        /// New weight.
        weight: f64,
    },
    /// An edge was removed.
    EdgeRemoved {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
        /// Weight the edge had.
        weight: f64,
    },
    /// Weight lookup result.
    Weight {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
        /// Edge weight.
        weight: f64,
    },
    /// Membership query result.
    Membership {
        /// The query, in script syntax.
        query: String,
        /// Whether the node or edge exists.
        present: bool,
    },
    /// Single-source distances in slot order.
    Distances {
        /// Source node.
        source: String,
        /// Distance to every node.
        distances: Vec<NodeDistance>,
    },
    /// All-pairs distance matrix.
    DistanceMatrix {
        /// Row and column labels, in slot order.
        nodes: Vec<String>,
        /// `distances[i][j]`, `None` where unreachable.
        distances: Vec<Vec<Option<f64>>>,
    },
    /// Path query result.
    Path {
        /// Start node.
        origin: String,
        /// End node.
        destination: String,
        /// The answer.
        report: PathReport,
    },
    /// Diagnostic dump text.
    Dump {
        /// The rendered dump.
        text: String,
    },
}

/// A graph of string-named nodes plus cached all-pairs state.
#[derive(Debug)]
pub struct Session {
    graph: Graph<String>,
    cache: FloydCache,
    precision: usize,
}

impl Session {
    /// Create an empty session sized and formatted per `config`.
    ///
    /// # Panics
    ///
    /// Panics if `config.capacity` exceeds [`MAX_CAPACITY`](crate::config::MAX_CAPACITY);
    /// [`WaypointConfig::validate`] rejects such configurations.
    pub fn new(config: &WaypointConfig) -> Self {
        info!(capacity = config.capacity, "starting session");
        Self {
            graph: Graph::with_capacity(config.capacity),
            cache: FloydCache::new(),
            precision: config.precision,
        }
    }

    /// The session's graph.
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Returns the graph error when the operation is rejected; the graph is
    /// left unchanged in that case.
    pub fn execute(&mut self, command: &Command) -> waypoint::Result<Response> {
        debug!(%command, "executing");
        let response = match command {
            Command::AddNode(node) => {
                let slot = self.graph.add_node(node.clone())?;
                Response::NodeAdded {
                    node: node.clone(),
                    slot,
                }
            }
            Command::RemoveNode(node) => {
                let node = self.graph.remove_node(node)?;
                Response::NodeRemoved { node }
            }
            Command::AddEdge {
                source,
                target,
                weight,
            } => {
                self.graph.add_edge(source, target, *weight)?;
                Response::EdgeSet {
                    source: source.clone(),
                    target: target.clone(),
                    weight: *weight,
                }
            }
            Command::RemoveEdge { source, target } => {
                let weight = self.graph.remove_edge(source, target)?;
                Response::EdgeRemoved {
                    source: source.clone(),
                    target: target.clone(),
                    weight,
                }
            }
            Command::Weight { source, target } => Response::Weight {
                source: source.clone(),
                target: target.clone(),
                weight: self.graph.edge_weight(source, target)?,
            },
            Command::HasNode(node) => Response::Membership {
                query: command.to_string(),
                present: self.graph.contains_node(node),
            },
            Command::HasEdge { source, target } => Response::Membership {
                query: command.to_string(),
                present: self.graph.contains_edge(source, target),
            },
            Command::Dijkstra(source) => {
                let result = self.graph.dijkstra(source)?;
                Response::Distances {
                    source: source.clone(),
                    distances: result
                        .iter()
                        .map(|(node, distance)| NodeDistance {
                            node: node.clone(),
                            distance: finite(distance),
                        })
                        .collect(),
                }
            }
            Command::Floyd => {
                let floyd = self.cache.get(&self.graph);
                Response::DistanceMatrix {
                    nodes: self.graph.nodes().to_vec(),
                    distances: floyd
                        .distances()
                        .rows()
                        .map(|row| row.iter().copied().map(finite).collect())
                        .collect(),
                }
            }
            Command::Path {
                origin,
                destination,
            } => {
                let outcome = self
                    .cache
                    .shortest_path_between(&self.graph, origin, destination);
                Response::Path {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    report: report(&outcome),
                }
            }
            Command::Dump => Response::Dump {
                text: self.graph.dump(self.precision).to_string(),
            },
        };
        Ok(response)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn report(outcome: &PathOutcome<'_, String>) -> PathReport {
    match outcome {
        PathOutcome::NotFound => PathReport::NotFound,
        PathOutcome::Unreachable => PathReport::Unreachable,
        PathOutcome::Found(path) => PathReport::Found {
            total_cost: path.total_cost(),
            steps: path
                .steps()
                .iter()
                .map(|step| NodeDistance {
                    node: step.node.clone(),
                    distance: Some(step.cost),
                })
                .collect(),
        },
    }
}
