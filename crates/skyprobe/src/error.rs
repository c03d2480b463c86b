//! CLI error types with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

use skyprobe_report::ReportError;
use skyprobe_telemetry::SnapshotError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const READ: i32 = 2;
    pub const PARSE: i32 = 3;
    pub const REPORT: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not read snapshot file {path}")]
    #[diagnostic(
        code(skyprobe::read_failed),
        help("Check that the file exists and is readable.")
    )]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot file is not a valid diagnostic document")]
    #[diagnostic(
        code(skyprobe::invalid_snapshot),
        help(
            "The file must contain a single JSON object with the device\n\
             sub-documents (dish / router / device) at the top level."
        )
    )]
    Snapshot(#[from] SnapshotError),

    #[error("Snapshot is incomplete")]
    #[diagnostic(
        code(skyprobe::incomplete_snapshot),
        help(
            "A reachable device is missing mandatory data. Snapshots taken\n\
             mid-boot can lack whole sections; capture a fresh one and retry."
        )
    )]
    Report(#[from] ReportError),

    #[error("Failed to serialize report")]
    #[diagnostic(code(skyprobe::serialize_failed))]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadFile { .. } => exit_code::READ,
            Self::Snapshot(_) => exit_code::PARSE,
            Self::Report(_) => exit_code::REPORT,
            Self::Serialize(_) => exit_code::GENERAL,
        }
    }
}
