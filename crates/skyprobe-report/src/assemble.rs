//! Snapshot-to-report assembly.
//!
//! Walks the snapshot's known top-level sections and builds one
//! [`DeviceReport`] per present entity, in a fixed presentation order
//! regardless of how the snapshot happens to be keyed on disk:
//! dish, router, local device, and always About last. Any entity
//! failure aborts the whole report.

use skyprobe_telemetry::Snapshot;
use tracing::{debug, info};

use crate::context::ReportContext;
use crate::entity;
use crate::error::ReportError;
use crate::report::DeviceReport;

const DISH_KEY: &str = "dish";
const ROUTER_KEY: &str = "router";
const DEVICE_KEY: &str = "device";

/// Build the ordered report list for one snapshot.
pub fn assemble(
    snapshot: &Snapshot,
    ctx: &ReportContext<'_>,
) -> Result<Vec<DeviceReport>, ReportError> {
    let mut reports = Vec::with_capacity(4);

    if let Some(doc) = snapshot.section(DISH_KEY) {
        debug!("loading dish entity");
        reports.push(entity::dish::report(doc, ctx)?);
    }
    if let Some(doc) = snapshot.section(ROUTER_KEY) {
        debug!("loading router entity");
        reports.push(entity::router::report(doc, ctx)?);
    }
    if let Some(doc) = snapshot.section(DEVICE_KEY) {
        debug!("loading local device entity");
        reports.push(entity::app::report(doc, ctx)?);
    }

    reports.push(entity::about::report(ctx));

    info!(entities = reports.len(), "assembled report");
    Ok(reports)
}
