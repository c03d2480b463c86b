//! Normalized report tree for satellite ground terminal telemetry.
//!
//! Takes a parsed [`Snapshot`](skyprobe_telemetry::Snapshot) covering the
//! dish, the router, and the companion app, and turns it into an ordered
//! list of [`DeviceReport`]s ready for rendering. Missing optional data
//! degrades to defaults; only a mandatory sub-document going missing is
//! an error.
//!
//! ```no_run
//! use skyprobe_report::{ReportContext, assemble};
//! use skyprobe_telemetry::Snapshot;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = Snapshot::parse(&std::fs::read_to_string("snapshot.json")?)?;
//! let reports = assemble(&snapshot, &ReportContext::new())?;
//! for report in &reports {
//!     println!("{} ({} rows)", report.display_name, report.primary.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod codes;
pub mod context;
pub mod entity;
pub mod error;
pub mod module;
pub mod report;

pub use assemble::assemble;
pub use context::{ImageHandle, Localize, ObstructionRasterizer, ReportContext};
pub use error::ReportError;
pub use report::{AccessMode, DeviceReport, EntityKind, ReportRow, ReportSection, RowValue};
