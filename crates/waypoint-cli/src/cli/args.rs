//! CLI argument structs for all commands.

use std::path::PathBuf;

use clap::Parser;

use crate::config::MAX_CAPACITY;

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Script file to execute (reads stdin when omitted or `-`)
    pub script: Option<PathBuf>,

    /// Stop at the first failing line and exit with an error
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `config` command
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Write the effective configuration to this file instead of printing it
    #[arg(short, long)]
    pub write: Option<PathBuf>,
}

/// Validate a capacity flag: a positive integer no larger than [`MAX_CAPACITY`].
pub fn validate_capacity(s: &str) -> Result<usize, String> {
    let capacity: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid capacity '{s}': expected a positive integer"))?;
    if capacity == 0 {
        return Err("Capacity must be at least 1".to_string());
    }
    if capacity > MAX_CAPACITY {
        return Err(format!("Capacity cannot exceed {MAX_CAPACITY}"));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one("1", 1)]
    #[case::padded(" 64 ", 64)]
    #[case::maximum("4096", 4096)]
    fn valid_capacity(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(validate_capacity(input), Ok(expected));
    }

    #[rstest]
    #[case::zero("0", "at least 1")]
    #[case::above_maximum("4097", "cannot exceed 4096")]
    #[case::huge("4294967296", "cannot exceed 4096")]
    #[case::negative("-3", "positive integer")]
    #[case::text("lots", "positive integer")]
    fn invalid_capacity(#[case] input: &str, #[case] expected: &str) {
        let err = validate_capacity(input).unwrap_err();
        assert!(err.contains(expected), "{err}");
    }
}
