//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success:   green   (applied mutations, found paths)
//!   - Error:     red     (rejected commands, parse errors)
//!   - Warning:   yellow  (unreachable targets)
//!   - Info:      cyan    (node names)
//!   - Muted:     dimmed  (infinite distances, separators)
//!   - Emphasis:  bold    (section headers, totals)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Dim text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Bold text.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_colors_disabled() {
        let config = OutputConfig::new(false, 2);
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(error("bad", &config), "bad");
        assert_eq!(warning("hmm", &config), "hmm");
        assert_eq!(info("A", &config), "A");
        assert_eq!(dimmed("inf", &config), "inf");
        assert_eq!(bold("NODES", &config), "NODES");
    }

    #[test]
    fn colored_output_keeps_text() {
        colored::control::set_override(true);
        let config = OutputConfig::new(true, 2);
        let text = success("ok", &config);
        assert!(text.contains("ok"));
        assert_ne!(text, "ok");
        colored::control::unset_override();
    }
}
