// ── Router entity ──

use indexmap::IndexMap;
use skyprobe_telemetry::Section;
use tracing::debug;

use crate::context::ReportContext;
use crate::entity::{format_epoch, gmt_zone};
use crate::error::ReportError;
use crate::module::flags::FlagScan;
use crate::module::{Module, router};
use crate::report::{AccessMode, DeviceReport, EntityKind, Rows};

const ENTITY: &str = "Router";

/// Build the router report from its unwrapped sub-document.
///
/// Requires both `deviceInfo` and `deviceState` when reachable.
pub fn report(
    doc: Section<'_>,
    ctx: &ReportContext<'_>,
) -> Result<DeviceReport, ReportError> {
    let reachable = doc.bool_or("reachable", false);
    let access = AccessMode::from_cloud(doc.bool_or("cloud", false));

    if !reachable {
        debug!("router is unreachable, emitting header-only report");
        return Ok(DeviceReport {
            kind: EntityKind::Router,
            display_name: ctx.text(ENTITY),
            reachable: false,
            access,
            sx_device: true,
            image: "router_unknown",
            primary: Vec::new(),
            modules: IndexMap::new(),
        });
    }

    let info = doc
        .child("deviceInfo")
        .ok_or_else(|| ReportError::missing(ENTITY, "deviceInfo"))?;
    let state = doc
        .child("deviceState")
        .ok_or_else(|| ReportError::missing(ENTITY, "deviceState"))?;

    let hw_version = info.str_or("hardwareVersion", "Unknown");

    let mut rows = Rows::new(ctx);
    rows.text("Hardware revision", &hw_version);
    rows.text("Router ID", info.str_or("id", "Unknown"));
    rows.text("Software version", info.str_or("softwareVersion", "Unknown"));
    rows.text("Manufactured version", info.str_or("manufacturedVersion", "Unknown"));
    rows.yes_no("Development hardware", info.bool_or("isDev", false));
    rows.text("Anti-Rollback version", info.i64_or("antiRollbackVersion", 0));
    rows.yes_no("Software parts equal", info.bool_or("softwarePartitionsEqual", false));
    rows.spacer();
    rows.text("Country code", info.str_or("countryCode", "Unknown"));
    rows.text("Device date/time", format_epoch(doc.i64_or("timestamp", 0)));
    rows.text("Device timezone", gmt_zone(info.i64_or("utcOffsetS", 0)));
    rows.text(
        "Uptime",
        format!("{} {}", state.i64_or("uptimeS", 0), ctx.text("seconds")),
    );
    rows.text("Boot count", info.i64_or("bootcount", 0));
    rows.spacer();
    rows.yes_no("Aviation", doc.bool_or("isAviation", false));
    rows.yes_no("Aviation conformed", doc.bool_or("isAviationConformed", false));
    rows.yes_no("Captive portal enabled", doc.bool_or("captivePortalEnabled", false));

    let modules = [
        Module::WanNetwork(router::WanNetwork::decode(doc)),
        Module::Alerts(FlagScan::alerts(doc)),
        Module::Features(FlagScan::features(doc)),
        Module::BootInfo(router::BootInfo::decode(doc)),
    ];

    let modules = modules
        .into_iter()
        .filter(Module::is_ready)
        .map(|m| (m.name().to_owned(), m.section(ctx)))
        .collect();

    Ok(DeviceReport {
        kind: EntityKind::Router,
        display_name: ctx.text(ENTITY),
        reachable: true,
        access,
        sx_device: true,
        image: device_image(&hw_version),
        primary: rows.into_rows(),
        modules,
    })
}

fn device_image(hw_version: &str) -> &'static str {
    match hw_version {
        "v1" => "router_v1",
        "v2" => "router_v2",
        _ => "router_unknown",
    }
}
