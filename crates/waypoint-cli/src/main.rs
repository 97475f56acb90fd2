//! Waypoint CLI binary.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use waypoint_cli::cli::Cli;

/// Default log filter for a verbosity level (`-v` count).
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "waypoint=info,waypoint_cli=info",
        1 => "waypoint=debug,waypoint_cli=debug",
        _ => "waypoint=trace,waypoint_cli=trace",
    }
}

/// Main entry point for the waypoint CLI.
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize tracing subscriber on stderr so stdout stays parseable.
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=waypoint=debug,waypoint_cli=trace waypoint run script.wp
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting waypoint CLI");

    cli.execute()?;

    tracing::debug!("Waypoint CLI completed successfully");
    Ok(())
}
