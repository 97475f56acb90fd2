//! Plain-text diagnostic dump of a graph.
//!
//! Renders three tab-separated sections: the node list in slot order, the
//! edge presence grid (`T`/`F`) and the weight grid. Only occupied slots are
//! printed.

use std::fmt::{self, Display, Formatter};

use super::Graph;

/// Decimal places used by `Display for Graph`.
pub const DEFAULT_PRECISION: usize = 2;

/// A [`Display`] adapter returned by [`Graph::dump`].
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a, T> {
    graph: &'a Graph<T>,
    precision: usize,
}

impl<T> Graph<T> {
    /// Dump adapter printing weights with at most `precision` decimals.
    #[must_use]
    pub fn dump(&self, precision: usize) -> Dump<'_, T> {
        Dump {
            graph: self,
            precision,
        }
    }
}

/// Format `value` with at most `precision` decimals, trimming trailing zeros.
///
/// `4.0` becomes `"4"` and `2.5` stays `"2.5"`. Infinity prints as `inf`.
#[must_use]
pub fn format_weight(value: f64, precision: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    let text = format!("{value:.precision$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

impl<T: Display> Display for Dump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let storage = self.graph.storage();
        let n = storage.len();

        writeln!(f, "NODES")?;
        for node in storage.nodes() {
            write!(f, "{node}\t")?;
        }
        writeln!(f)?;

        writeln!(f, "\nEDGES")?;
        for i in 0..n {
            for j in 0..n {
                write!(f, "{}\t", if storage.has_edge(i, j) { 'T' } else { 'F' })?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nWEIGHTS")?;
        let weights = storage.weight_matrix();
        for i in 0..n {
            for j in 0..n {
                write!(f, "{}\t", format_weight(weights[(i, j)], self.precision))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Graph<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.dump(DEFAULT_PRECISION).fmt(f)
    }
}
