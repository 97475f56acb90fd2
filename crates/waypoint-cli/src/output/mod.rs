//! Output formatting for CLI commands.
//!
//! Responses render either as human-readable text or, with `--json`, as one
//! JSON object per line:
//!
//! ```text
//! {"line":3,"ok":true,"response":{"kind":"edge_set","source":"A","target":"B","weight":4.0}}
//! {"line":4,"ok":false,"error":"node not found"}
//! ```
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use serde::Serialize;
use waypoint::graph::format_weight;

use crate::config::WaypointConfig;
use crate::session::{NodeDistance, PathReport, Response};
use color::{bold, dimmed, error, info, success, warning};

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Decimals printed for weights and distances.
    pub precision: usize,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_colors: bool, precision: usize) -> Self {
        Self {
            use_colors,
            precision,
        }
    }
}

impl From<&WaypointConfig> for OutputConfig {
    fn from(config: &WaypointConfig) -> Self {
        Self::new(config.output.color, config.precision)
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    line: usize,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a Response>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Serialize a successful response as a JSON line.
pub fn json_response(line: usize, response: &Response) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        line,
        ok: true,
        response: Some(response),
        error: None,
    })
}

/// Serialize a failure as a JSON line.
pub fn json_failure(line: usize, message: &str) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        line,
        ok: false,
        response: None,
        error: Some(message),
    })
}

/// Render a failure for humans.
pub fn render_failure(line: usize, message: &str, config: &OutputConfig) -> String {
    format!("{} line {line}: {message}", error("✗", config))
}

/// Render a response for humans.
pub fn render_response(response: &Response, config: &OutputConfig) -> String {
    let weight = |w: f64| format_weight(w, config.precision);
    let check = success("✓", config);

    match response {
        Response::NodeAdded { node, slot } => {
            format!("{check} node {} (slot {slot})", info(node, config))
        }
        Response::NodeRemoved { node } => {
            format!("{check} removed node {}", info(node, config))
        }
        Response::EdgeSet {
            source,
            target,
            weight: w,
        } => format!(
            "{check} edge {} -> {} ({})",
            info(source, config),
            info(target, config),
            weight(*w)
        ),
        Response::EdgeRemoved {
            source,
            target,
            weight: w,
        } => format!(
            "{check} removed edge {} -> {} ({})",
            info(source, config),
            info(target, config),
            weight(*w)
        ),
        Response::Weight {
            source,
            target,
            weight: w,
        } => format!(
            "{} -> {}: {}",
            info(source, config),
            info(target, config),
            weight(*w)
        ),
        Response::Membership { query, present } => {
            let answer = if *present {
                success("yes", config)
            } else {
                warning("no", config)
            };
            format!("{query}: {answer}")
        }
        Response::Distances { source, distances } => {
            let mut out = bold(&format!("dijkstra from {source}"), config);
            for NodeDistance { node, distance } in distances {
                out.push_str(&format!(
                    "\n  {}\t{}",
                    info(node, config),
                    render_distance(*distance, config)
                ));
            }
            out
        }
        Response::DistanceMatrix { nodes, distances } => render_matrix(nodes, distances, config),
        Response::Path {
            origin,
            destination,
            report,
        } => render_path(origin, destination, report, config),
        Response::Dump { text } => text.trim_end().to_string(),
    }
}

fn render_distance(distance: Option<f64>, config: &OutputConfig) -> String {
    match distance {
        Some(d) => format_weight(d, config.precision),
        None => dimmed("inf", config),
    }
}

fn render_matrix(
    nodes: &[String],
    distances: &[Vec<Option<f64>>],
    config: &OutputConfig,
) -> String {
    let mut out = bold("floyd", config);
    out.push('\n');
    for node in nodes {
        out.push('\t');
        out.push_str(&info(node, config));
    }
    for (node, row) in nodes.iter().zip(distances) {
        out.push('\n');
        out.push_str(&info(node, config));
        for cell in row {
            out.push('\t');
            out.push_str(&render_distance(*cell, config));
        }
    }
    out
}

fn render_path(
    origin: &str,
    destination: &str,
    report: &PathReport,
    config: &OutputConfig,
) -> String {
    let header = format!("{} -> {}", info(origin, config), info(destination, config));
    match report {
        PathReport::NotFound => format!("{header}: {}", error("not found", config)),
        PathReport::Unreachable => format!("{header}: {}", warning("unreachable (inf)", config)),
        PathReport::Found { total_cost, steps } => {
            let steps: Vec<String> = steps
                .iter()
                .map(|step| {
                    format!(
                        "{} ({})",
                        info(&step.node, config),
                        render_distance(step.distance, config)
                    )
                })
                .collect();
            format!(
                "{header}: {}\n  {}",
                bold(&format_weight(*total_cost, config.precision), config),
                steps.join("\t")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn plain() -> OutputConfig {
        OutputConfig::new(false, 2)
    }

    #[rstest]
    #[case::node_added(
        Response::NodeAdded { node: "A".into(), slot: 0 },
        "✓ node A (slot 0)"
    )]
    #[case::edge_set(
        Response::EdgeSet { source: "A".into(), target: "B".into(), weight: 4.0 },
        "✓ edge A -> B (4)"
    )]
    #[case::edge_removed(
        Response::EdgeRemoved { source: "A".into(), target: "B".into(), weight: 0.5 },
        "✓ removed edge A -> B (0.5)"
    )]
    #[case::weight(
        Response::Weight { source: "A".into(), target: "B".into(), weight: 1.0 / 3.0 },
        "A -> B: 0.33"
    )]
    #[case::membership(
        Response::Membership { query: "has-node A".into(), present: false },
        "has-node A: no"
    )]
    #[case::unreachable(
        Response::Path {
            origin: "A".into(),
            destination: "B".into(),
            report: PathReport::Unreachable,
        },
        "A -> B: unreachable (inf)"
    )]
    #[case::not_found(
        Response::Path {
            origin: "A".into(),
            destination: "Z".into(),
            report: PathReport::NotFound,
        },
        "A -> Z: not found"
    )]
    fn renders_single_line_responses(#[case] response: Response, #[case] expected: &str) {
        assert_eq!(render_response(&response, &plain()), expected);
    }

    #[test]
    fn renders_found_path() {
        let response = Response::Path {
            origin: "A".into(),
            destination: "C".into(),
            report: PathReport::Found {
                total_cost: 7.0,
                steps: vec![
                    NodeDistance { node: "A".into(), distance: Some(0.0) },
                    NodeDistance { node: "B".into(), distance: Some(4.0) },
                    NodeDistance { node: "C".into(), distance: Some(7.0) },
                ],
            },
        };
        assert_eq!(
            render_response(&response, &plain()),
            "A -> C: 7\n  A (0)\tB (4)\tC (7)"
        );
    }

    #[test]
    fn renders_distances_and_matrix() {
        let distances = Response::Distances {
            source: "A".into(),
            distances: vec![
                NodeDistance { node: "A".into(), distance: Some(0.0) },
                NodeDistance { node: "B".into(), distance: None },
            ],
        };
        assert_eq!(
            render_response(&distances, &plain()),
            "dijkstra from A\n  A\t0\n  B\tinf"
        );

        let matrix = Response::DistanceMatrix {
            nodes: vec!["A".into(), "B".into()],
            distances: vec![vec![Some(0.0), Some(2.5)], vec![None, Some(0.0)]],
        };
        assert_eq!(
            render_response(&matrix, &plain()),
            "floyd\n\tA\tB\nA\t0\t2.5\nB\tinf\t0"
        );
    }

    #[test]
    fn json_lines() {
        let response = Response::NodeRemoved { node: "A".into() };
        assert_eq!(
            json_response(2, &response).unwrap(),
            r#"{"line":2,"ok":true,"response":{"kind":"node_removed","node":"A"}}"#
        );
        assert_eq!(
            json_failure(5, "node not found").unwrap(),
            r#"{"line":5,"ok":false,"error":"node not found"}"#
        );
    }

    #[test]
    fn failure_line() {
        assert_eq!(
            render_failure(3, "edge not found", &plain()),
            "✗ line 3: edge not found"
        );
    }
}
