//! Command execution.
//!
//! [`run_script`] drives a [`Session`] line by line, writing one rendered
//! result per command. A rejected command does not stop the script unless
//! strict mode is on.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::output::{json_failure, json_response, render_failure, render_response, OutputConfig};
use crate::script::parse_line;
use crate::session::Session;

/// How results are written and whether failures abort the run.
#[derive(Debug, Clone)]
pub struct RunMode {
    /// Emit JSON lines instead of text.
    pub json: bool,
    /// Abort at the first failing line.
    pub strict: bool,
    /// Text formatting settings.
    pub output: OutputConfig,
}

/// Counts collected over a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that executed successfully.
    pub succeeded: usize,
    /// Lines or commands that failed.
    pub failed: usize,
}

/// Execute every line of `input`, writing results to `out`.
///
/// # Errors
///
/// I/O errors reading or writing. In strict mode, the first failing line is
/// returned as [`Error::Script`] after it has been reported.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    session: &mut Session,
    mode: &RunMode,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;

        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(message) => {
                report_failure(out, line_number, &message, mode, &mut summary)?;
                continue;
            }
        };

        for command in commands {
            match session.execute(&command) {
                Ok(response) => {
                    summary.succeeded += 1;
                    if mode.json {
                        writeln!(out, "{}", json_response(line_number, &response)?)?;
                    } else {
                        writeln!(out, "{}", render_response(&response, &mode.output))?;
                    }
                }
                Err(err) => {
                    let message = format!("{command}: {err}");
                    report_failure(out, line_number, &message, mode, &mut summary)?;
                }
            }
        }
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "script finished"
    );
    Ok(summary)
}

fn report_failure<W: Write>(
    out: &mut W,
    line: usize,
    message: &str,
    mode: &RunMode,
    summary: &mut RunSummary,
) -> Result<()> {
    warn!(line, error = message, "script line failed");
    summary.failed += 1;

    if mode.json {
        writeln!(out, "{}", json_failure(line, message)?)?;
    } else {
        writeln!(out, "{}", render_failure(line, message, &mode.output))?;
    }

    if mode.strict {
        return Err(Error::Script {
            line,
            message: message.to_string(),
        });
    }
    Ok(())
}
