//! Graph script parsing.
//!
//! A script is line oriented: one command per line, whitespace-separated
//! tokens, `#` starts a comment. Blank lines and comment-only lines parse to
//! no commands; `node A B C` expands to one command per node.
//!
//! ```text
//! # three cities
//! node A B C
//! edge A B 4
//! edge B C 3
//! path A C
//! ```

use std::fmt;

/// A single graph operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `node <name>`
    AddNode(String),
    /// `remove-node <name>`
    RemoveNode(String),
    /// `edge <source> <target> <weight>`
    AddEdge {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
        /// Edge weight (validated by the graph, not the parser).
        weight: f64,
    },
    /// `remove-edge <source> <target>`
    RemoveEdge {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
    },
    /// `weight <source> <target>`
    Weight {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
    },
    /// `has-node <name>`
    HasNode(String),
    /// `has-edge <source> <target>`
    HasEdge {
        /// Source node.
        source: String,
        /// Target node.
        target: String,
    },
    /// `dijkstra <source>`
    Dijkstra(String),
    /// `floyd`
    Floyd,
    /// `path <origin> <destination>`
    Path {
        /// Start node.
        origin: String,
        /// End node.
        destination: String,
    },
    /// `dump`
    Dump,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddNode(name) => write!(f, "node {name}"),
            Self::RemoveNode(name) => write!(f, "remove-node {name}"),
            Self::AddEdge {
                source,
                target,
                weight,
            } => write!(f, "edge {source} {target} {weight}"),
            Self::RemoveEdge { source, target } => write!(f, "remove-edge {source} {target}"),
            Self::Weight { source, target } => write!(f, "weight {source} {target}"),
            Self::HasNode(name) => write!(f, "has-node {name}"),
            Self::HasEdge { source, target } => write!(f, "has-edge {source} {target}"),
            Self::Dijkstra(source) => write!(f, "dijkstra {source}"),
            Self::Floyd => write!(f, "floyd"),
            Self::Path {
                origin,
                destination,
            } => write!(f, "path {origin} {destination}"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

/// Parse one script line.
///
/// Returns an empty list for blank and comment lines. The error is a
/// human-readable message; the caller attaches the line number.
pub fn parse_line(line: &str) -> Result<Vec<Command>, String> {
    let code = line.split('#').next().unwrap_or_default();
    let mut tokens = code.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(Vec::new());
    };
    let args: Vec<&str> = tokens.collect();

    let command = match keyword {
        "node" => {
            if args.is_empty() {
                return Err("'node' expects at least one node name".to_string());
            }
            return Ok(args
                .iter()
                .map(|name| Command::AddNode((*name).to_string()))
                .collect());
        }
        "remove-node" => {
            let [name] = expect_args::<1>(keyword, &args)?;
            Command::RemoveNode(name)
        }
        "edge" => {
            let [source, target, weight] = expect_args::<3>(keyword, &args)?;
            let weight = weight
                .parse::<f64>()
                .map_err(|_| format!("invalid weight '{weight}'"))?;
            Command::AddEdge {
                source,
                target,
                weight,
            }
        }
        "remove-edge" => {
            let [source, target] = expect_args::<2>(keyword, &args)?;
            Command::RemoveEdge { source, target }
        }
        "weight" => {
            let [source, target] = expect_args::<2>(keyword, &args)?;
            Command::Weight { source, target }
        }
        "has-node" => {
            let [name] = expect_args::<1>(keyword, &args)?;
            Command::HasNode(name)
        }
        "has-edge" => {
            let [source, target] = expect_args::<2>(keyword, &args)?;
            Command::HasEdge { source, target }
        }
        "dijkstra" => {
            let [source] = expect_args::<1>(keyword, &args)?;
            Command::Dijkstra(source)
        }
        "floyd" => {
            expect_args::<0>(keyword, &args)?;
            Command::Floyd
        }
        "path" => {
            let [origin, destination] = expect_args::<2>(keyword, &args)?;
            Command::Path {
                origin,
                destination,
            }
        }
        "dump" => {
            expect_args::<0>(keyword, &args)?;
            Command::Dump
        }
        other => return Err(format!("unknown command '{other}'")),
    };

    Ok(vec![command])
}

fn expect_args<const N: usize>(keyword: &str, args: &[&str]) -> Result<[String; N], String> {
    if args.len() != N {
        return Err(format!(
            "'{keyword}' expects {N} argument{}, got {}",
            if N == 1 { "" } else { "s" },
            args.len()
        ));
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
