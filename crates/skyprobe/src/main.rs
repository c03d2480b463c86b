mod cli;
mod error;
mod output;
mod raster;

use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skyprobe_report::{ReportContext, assemble};
use skyprobe_telemetry::Snapshot;

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;
use crate::raster::SvgRasterizer;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let raw = fs::read_to_string(&cli.file).map_err(|source| CliError::ReadFile {
        path: cli.file.display().to_string(),
        source,
    })?;

    let snapshot = Snapshot::parse(&raw)?;

    let rasterizer = SvgRasterizer;
    let ctx = ReportContext::new().with_rasterizer(&rasterizer);
    let reports = assemble(&snapshot, &ctx)?;

    let rendered = match cli.output {
        OutputFormat::Text => output::render_text(&reports, output::should_color(cli.color)),
        OutputFormat::Json => output::render_json(&reports)?,
    };
    print!("{rendered}");

    // Snapshots handed over by the browser land in tmp; callers can ask
    // us to clean up after a successful render.
    if cli.remove_file_on_exit {
        if let Err(err) = fs::remove_file(&cli.file) {
            tracing::warn!(path = %cli.file.display(), %err, "could not remove snapshot file");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_renders_and_removes_the_snapshot_on_request() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snap.json");
        fs::write(&path, r#"{"dish": {"reachable": false}}"#).expect("write snapshot");

        let cli = Cli::parse_from([
            "skyprobe",
            "-f",
            path.to_str().expect("utf8 path"),
            "--color",
            "never",
            "-r",
        ]);
        run(&cli).expect("run");
        assert!(!path.exists(), "snapshot should be cleaned up");
    }

    #[test]
    fn missing_file_maps_to_read_error() {
        let cli = Cli::parse_from(["skyprobe", "-f", "/definitely/not/here.json"]);
        let err = run(&cli).expect_err("should fail");
        assert!(matches!(err, CliError::ReadFile { .. }));
    }

    #[test]
    fn invalid_json_maps_to_snapshot_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("snap.json");
        fs::write(&path, "not json").expect("write snapshot");

        let cli = Cli::parse_from(["skyprobe", "-f", path.to_str().expect("utf8 path")]);
        let err = run(&cli).expect_err("should fail");
        assert!(matches!(err, CliError::Snapshot(_)));
    }
}
