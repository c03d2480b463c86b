// ── Dish entity ──

use indexmap::IndexMap;
use skyprobe_telemetry::Section;
use tracing::debug;

use crate::codes::{
    ActuatorStatus, DisablementCode, MobilityClass, ServiceClass, SoftwareUpdateState,
};
use crate::context::ReportContext;
use crate::entity::{format_epoch, gmt_zone};
use crate::error::ReportError;
use crate::module::flags::FlagScan;
use crate::module::{Module, dish};
use crate::report::{AccessMode, DeviceReport, EntityKind, Rows};

const ENTITY: &str = "Dish";

/// Build the dish report from its unwrapped sub-document.
///
/// Requires `deviceInfo` when the dish is reachable; everything else
/// degrades to defaults.
pub fn report(
    doc: Section<'_>,
    ctx: &ReportContext<'_>,
) -> Result<DeviceReport, ReportError> {
    let reachable = doc.bool_or("reachable", false);
    let access = AccessMode::from_cloud(doc.bool_or("cloud", false));

    if !reachable {
        debug!("dish is unreachable, emitting header-only report");
        return Ok(DeviceReport {
            kind: EntityKind::Dish,
            display_name: ctx.text(ENTITY),
            reachable: false,
            access,
            sx_device: true,
            image: "dishy_unknown",
            primary: Vec::new(),
            modules: IndexMap::new(),
        });
    }

    let info = doc
        .child("deviceInfo")
        .ok_or_else(|| ReportError::missing(ENTITY, "deviceInfo"))?;

    let hw_version = info.str_or("hardwareVersion", "Unknown");
    let mf_version = info.str_or("manufacturedVersion", "Unknown");
    let anti_rollback = info.i64_or("antiRollbackVersion", 0);
    let uptime = doc
        .child("deviceState")
        .map_or(0, |state| state.i64_or("uptimeS", 0));

    let actuators = ActuatorStatus::from_code(doc.i64_or("hasActuators", 0));
    let update_state = SoftwareUpdateState::from_code(doc.i64_or("softwareUpdateState", 0));
    let mobility = MobilityClass::from_code(doc.i64_or("mobilityClass", 0));
    let service = ServiceClass::from_code(doc.i64_or("classOfService", 0));
    let disablement = DisablementCode::from_code(doc.i64_or("disablementCode", 0));

    let mut rows = Rows::new(ctx);
    rows.text("Hardware revision", &hw_version);
    rows.text("Software version", info.str_or("softwareVersion", "Unknown"));
    rows.text("Software update state", ctx.text(update_state.label()));
    rows.text("User terminal ID", info.str_or("id", "Unknown"));
    rows.yes_no("Development hardware", info.bool_or("isDev", false));
    rows.yes_no("Starlink cohoused", info.bool_or("dishCohoused", false));
    rows.text("Actuators", ctx.text(actuators.label()));
    rows.yes_no("Stow requested", doc.bool_or("stowRequested", false));
    if !mf_version.is_empty() {
        rows.text("Manufactured version", &mf_version);
    }
    rows.text("Boot count", info.i64_or("bootcount", 0));
    rows.yes_no("Software parts equal", info.bool_or("softwarePartitionsEqual", false));
    if anti_rollback != 0 {
        rows.text("Anti-Rollback version", anti_rollback);
    }
    rows.spacer();
    rows.text("Country code", info.str_or("countryCode", "Unknown"));
    rows.text("Device date/time", format_epoch(doc.i64_or("timestamp", 0)));
    rows.text("Device timezone", gmt_zone(info.i64_or("utcOffsetS", 0)));
    rows.text("Uptime", format!("{uptime} {}", ctx.text("seconds")));
    rows.spacer();
    rows.text("Class of service", ctx.text(service.label()));
    rows.text("Mobility class", ctx.text(mobility.label()));
    rows.text("Service state", ctx.text(disablement.label()));

    let modules = [
        Module::DishNetwork(dish::Network::decode(doc)),
        Module::Gps(dish::Gps::decode(doc)),
        Module::Antenna(dish::Antenna::decode(doc)),
        Module::Alignment(dish::Alignment::decode(doc)),
        Module::Alerts(FlagScan::alerts(doc)),
        Module::Config(FlagScan::config(doc)),
        Module::Features(FlagScan::features(doc)),
        Module::ReadyStates(dish::ReadyStates::decode(doc)),
        Module::Outage(dish::Outage::decode(doc)),
        Module::Obstructions(dish::Obstructions::decode(doc, ctx)),
    ];

    let modules = modules
        .into_iter()
        .filter(Module::is_ready)
        .map(|m| (m.name().to_owned(), m.section(ctx)))
        .collect();

    Ok(DeviceReport {
        kind: EntityKind::Dish,
        display_name: ctx.text(ENTITY),
        reachable: true,
        access,
        sx_device: true,
        image: device_image(&hw_version, actuators),
        primary: rows.into_rows(),
        modules,
    })
}

/// Pick the device-image key for a hardware revision. The high-power
/// proto boards without actuators ship the flat enclosure.
fn device_image(hw_version: &str, actuators: ActuatorStatus) -> &'static str {
    if matches!(hw_version, "hp1_proto0" | "hp1_proto1")
        && matches!(actuators, ActuatorStatus::Unknown | ActuatorStatus::NoActuators)
    {
        return "dishy_hp_flat";
    }

    match hw_version {
        "rev1_pre_production" | "rev1_production" | "rev1_proto3" => "dishy_v1",
        "rev2_proto1" | "rev2_proto2" | "rev2_proto3" | "rev2_proto4" => "dishy_v2",
        "rev3_proto0" | "rev3_proto1" | "rev3_proto2" => "dishy_v3",
        "hp1_proto0" | "hp1_proto1" => "dishy_hp",
        "hp_flat" => "dishy_hp_flat",
        "rev4_proto3" | "rev4_proto4" | "rev4_prod1" => "dishy_v4",
        "mini1_prod1" => "dishy_mini",
        "rev_never_gonna_give_you_up" => "entity_astl",
        _ => "dishy_unknown",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use skyprobe_telemetry::Snapshot;

    use super::*;
    use crate::report::RowValue;

    fn build(value: serde_json::Value) -> Result<DeviceReport, ReportError> {
        let snap = Snapshot::from_value(value).expect("object root");
        let doc = snap.section("dish").expect("dish section");
        report(doc, &ReportContext::new())
    }

    #[test]
    fn unreachable_dish_has_no_rows_and_no_modules() {
        let report = build(json!({ "dish": { "reachable": false } })).expect("report");
        assert!(!report.reachable);
        assert_eq!(report.access, AccessMode::Local);
        assert!(report.primary.is_empty());
        assert!(report.modules.is_empty());
    }

    #[test]
    fn reachable_dish_without_device_info_is_fatal() {
        let err = build(json!({ "dish": { "reachable": true } })).unwrap_err();
        assert_eq!(
            err,
            ReportError::MissingSection {
                entity: "Dish",
                section: "deviceInfo"
            }
        );
    }

    #[test]
    fn primary_rows_follow_fixed_order_with_conditional_entries() {
        let report = build(json!({
            "dish": {
                "reachable": true,
                "cloud": true,
                "timestamp": 1_700_000_000,
                "hasActuators": 1,
                "softwareUpdateState": 2,
                "deviceInfo": {
                    "id": "ut0123",
                    "hardwareVersion": "rev3_proto1",
                    "softwareVersion": "2026.01.1",
                    "manufacturedVersion": "",
                    "antiRollbackVersion": 0,
                    "utcOffsetS": 7200,
                    "bootcount": 42
                },
                "deviceState": { "uptimeS": 86_400 }
            }
        }))
        .expect("report");

        assert_eq!(report.access, AccessMode::Remote);
        assert_eq!(report.image, "dishy_v3");

        let labels: Vec<&str> = report.primary.iter().map(|r| r.label.as_str()).collect();
        // Empty manufactured version and zero anti-rollback drop their rows.
        assert!(!labels.contains(&"Manufactured version"));
        assert!(!labels.contains(&"Anti-Rollback version"));
        assert_eq!(labels[0], "Hardware revision");
        assert_eq!(labels[7], "Stow requested");
        assert_eq!(labels[10], " ");
        assert_eq!(labels[14], "Uptime");

        assert_eq!(report.primary[2].value, RowValue::Text("Fetching".into()));
        assert_eq!(report.primary[13].value, RowValue::Text("GMT2".into()));
        assert_eq!(report.primary[14].value, RowValue::Text("86400 seconds".into()));
    }

    #[test]
    fn ready_modules_keep_construction_order() {
        let report = build(json!({
            "dish": {
                "reachable": true,
                "deviceInfo": { "hardwareVersion": "rev4_prod1" },
                "gpsStats": { "gpsValid": true },
                "outage": { "cause": 1 }
            }
        }))
        .expect("report");

        let names: Vec<&str> = report.modules.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            ["Network", "GPS", "Antenna", "Alerts", "Config", "Features", "Outage"]
        );
    }

    #[test]
    fn hp_proto_without_actuators_gets_flat_image() {
        assert_eq!(device_image("hp1_proto0", ActuatorStatus::Unknown), "dishy_hp_flat");
        assert_eq!(device_image("hp1_proto0", ActuatorStatus::NoActuators), "dishy_hp_flat");
        assert_eq!(device_image("hp1_proto1", ActuatorStatus::HasActuators), "dishy_hp");
        assert_eq!(device_image("mini1_prod1", ActuatorStatus::Unknown), "dishy_mini");
        assert_eq!(device_image("rev9_quantum", ActuatorStatus::Unknown), "dishy_unknown");
    }
}
