//! Clap derive structures for the `skyprobe` CLI.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// skyprobe -- inspect satellite terminal diagnostic snapshots
#[derive(Debug, Parser)]
#[command(
    name = "skyprobe",
    version,
    about = "Render a terminal diagnostic snapshot as a readable report",
    long_about = "Parses a diagnostic JSON snapshot covering the dish, the router,\n\
        and the companion app, and renders a normalized per-device report.\n\
        Missing optional data degrades gracefully; unknown enum codes are\n\
        reported as such rather than rejected."
)]
pub struct Cli {
    /// Input JSON snapshot file
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'o', default_value = "text")]
    pub output: OutputFormat,

    /// When to use colors in text output
    #[arg(long, default_value = "auto")]
    pub color: ColorMode,

    /// Remove the snapshot file after rendering
    #[arg(long, short = 'r')]
    pub remove_file_on_exit: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented plain-text report
    Text,
    /// Pretty-printed JSON report tree
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn minimal_invocation_defaults_to_text_output() {
        let cli = Cli::parse_from(["skyprobe", "--file", "snap.json"]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(!cli.remove_file_on_exit);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::parse_from(["skyprobe", "-f", "snap.json", "-o", "json", "-r", "-vv"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.remove_file_on_exit);
        assert_eq!(cli.verbose, 2);
    }
}
