//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `run`: Execute a graph script from a file or stdin
//! - `config`: Show (or write) the effective configuration
//!
//! # Global Flags
//!
//! - `--json`: Output JSON lines (applies to `run`)
//! - `--config <PATH>`: YAML configuration file
//! - `--capacity <N>`: Node capacity, overriding the configuration
//! - `-v`: More logging (repeatable)
//!
//! # Example
//!
//! ```bash
//! printf 'node A B C\nedge A B 4\nedge B C 3\npath A C\n' | waypoint run
//! waypoint --json --capacity 16 run routes.wp
//! ```

mod args;
mod execute;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

pub use args::{validate_capacity, ConfigArgs, RunArgs};
pub use execute::{run_script, RunMode, RunSummary};

use crate::config::WaypointConfig;
use crate::output::OutputConfig;
use crate::session::Session;

/// Waypoint - shortest paths over a fixed-capacity weighted graph
///
/// Build a directed graph from a line-oriented script and query it with
/// Dijkstra and Floyd-Warshall.
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum number of nodes (overrides configuration)
    #[arg(long, global = true, value_parser = validate_capacity)]
    pub capacity: Option<usize>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Execute a graph script
    ///
    /// Each line is one command: node, remove-node, edge, remove-edge,
    /// weight, has-node, has-edge, dijkstra, floyd, path, dump.
    Run(RunArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve configuration: file, then environment, then flags.
    pub fn resolve_config(&self) -> Result<WaypointConfig> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let mut config = WaypointConfig::discover(self.config.as_deref(), &cwd)?;
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        config.validate()?;
        Ok(config)
    }

    /// Execute the parsed command.
    pub fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        tracing::debug!(?config, "configuration resolved");

        match &self.command {
            Commands::Run(args) => self.execute_run(args, &config),
            Commands::Config(args) => execute_config(args, &config),
        }
    }

    fn execute_run(&self, args: &RunArgs, config: &WaypointConfig) -> Result<()> {
        let mode = RunMode {
            json: self.json,
            strict: args.strict,
            output: OutputConfig::from(config),
        };
        let mut session = Session::new(config);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        let summary = match args.script.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open script {}", path.display()))?;
                run_script(BufReader::new(file), &mut out, &mut session, &mode)?
            }
            _ => run_script(io::stdin().lock(), &mut out, &mut session, &mode)?,
        };

        tracing::debug!(?summary, "run complete");
        Ok(())
    }
}

fn execute_config(args: &ConfigArgs, config: &WaypointConfig) -> Result<()> {
    if let Some(path) = &args.write {
        config.save(path)?;
        println!("Wrote configuration to {}", path.display());
    } else {
        print!(
            "{}",
            serde_yaml::to_string(config).context("cannot serialize configuration")?
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["waypoint", "run", "script.wp", "--json", "--capacity", "8"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.capacity, Some(8));
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.script, Some(PathBuf::from("script.wp")));
        assert!(!args.strict);
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(Cli::try_parse_from(["waypoint", "--capacity", "0", "run"]).is_err());
    }

    #[test]
    fn rejects_capacity_above_maximum() {
        let err = Cli::try_parse_from(["waypoint", "--capacity", "4294967296", "run"]).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"), "{err}");
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["waypoint", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
