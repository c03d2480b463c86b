//! Per-entity report modules.
//!
//! A module owns one thematic slice of an entity's telemetry. It decodes
//! itself from the entity document at construction, records whether its
//! data was actually present, and renders a titled section on demand.
//! Modules whose data never showed up stay out of the report entirely.

pub mod app;
pub mod dish;
pub mod flags;
pub mod router;

use crate::context::ReportContext;
use crate::report::ReportSection;

use self::flags::FlagScan;

/// One decoded module, dispatched by entity flavor.
#[derive(Debug, Clone)]
pub enum Module {
    DishNetwork(dish::Network),
    Gps(dish::Gps),
    Antenna(dish::Antenna),
    Alignment(dish::Alignment),
    Alerts(FlagScan),
    Config(FlagScan),
    Features(FlagScan),
    ReadyStates(dish::ReadyStates),
    Outage(dish::Outage),
    Obstructions(dish::Obstructions),
    WanNetwork(router::WanNetwork),
    BootInfo(router::BootInfo),
    AppNetwork(app::AppNetwork),
    Sensors(app::Sensors),
}

impl Module {
    /// Stable module identifier, used as the report-tree key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DishNetwork(_) | Self::WanNetwork(_) => "Network",
            Self::Gps(_) => "GPS",
            Self::Antenna(_) => "Antenna",
            Self::Alignment(_) => "Alignment",
            Self::Alerts(_) => "Alerts",
            Self::Config(_) => "Config",
            Self::Features(_) => "Features",
            Self::ReadyStates(_) => "ReadyStates",
            Self::Outage(_) => "Outage",
            Self::Obstructions(_) => "Obstructions",
            Self::BootInfo(_) => "BootInfo",
            Self::AppNetwork(_) => "DeviceNetwork",
            Self::Sensors(_) => "DeviceSensors",
        }
    }

    /// Whether the module's backing data was present in the snapshot.
    pub fn is_ready(&self) -> bool {
        match self {
            // Decoded from fields the feed always carries.
            Self::DishNetwork(_)
            | Self::Antenna(_)
            | Self::WanNetwork(_)
            | Self::Alerts(_)
            | Self::Config(_)
            | Self::Features(_) => true,
            Self::Gps(m) => m.is_ready(),
            Self::Alignment(m) => m.is_ready(),
            Self::ReadyStates(m) => m.is_ready(),
            Self::Outage(m) => m.is_ready(),
            Self::Obstructions(m) => m.is_ready(),
            Self::BootInfo(m) => m.is_ready(),
            Self::AppNetwork(m) => m.is_ready(),
            Self::Sensors(m) => m.is_ready(),
        }
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        match self {
            Self::DishNetwork(m) => m.section(ctx),
            Self::Gps(m) => m.section(ctx),
            Self::Antenna(m) => m.section(ctx),
            Self::Alignment(m) => m.section(ctx),
            Self::Alerts(m) => m.section(ctx, "Alerts"),
            Self::Config(m) => m.section(ctx, "Config"),
            Self::Features(m) => m.section(ctx, "Features"),
            Self::ReadyStates(m) => m.section(ctx),
            Self::Outage(m) => m.section(ctx),
            Self::Obstructions(m) => m.section(ctx),
            Self::WanNetwork(m) => m.section(ctx),
            Self::BootInfo(m) => m.section(ctx),
            Self::AppNetwork(m) => m.section(ctx),
            Self::Sensors(m) => m.section(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use skyprobe_telemetry::Snapshot;

    use super::*;

    #[test]
    fn names_are_stable_identifiers() {
        let snap = Snapshot::from_value(json!({ "dish": {}, "device": {} }))
            .expect("object root");
        let dish_doc = snap.section("dish").expect("dish");
        let device_doc = snap.section("device").expect("device");

        assert_eq!(Module::DishNetwork(dish::Network::decode(dish_doc)).name(), "Network");
        assert_eq!(Module::Gps(dish::Gps::decode(dish_doc)).name(), "GPS");
        assert_eq!(
            Module::AppNetwork(app::AppNetwork::decode(device_doc)).name(),
            "DeviceNetwork"
        );
        assert_eq!(
            Module::Sensors(app::Sensors::decode(device_doc)).name(),
            "DeviceSensors"
        );
    }

    #[test]
    fn flag_modules_are_always_ready() {
        let snap = Snapshot::from_value(json!({ "dish": {} })).expect("object root");
        let doc = snap.section("dish").expect("dish");

        assert!(Module::Alerts(FlagScan::alerts(doc)).is_ready());
        assert!(Module::Config(FlagScan::config(doc)).is_ready());
        assert!(Module::Features(FlagScan::features(doc)).is_ready());
        assert!(!Module::Gps(dish::Gps::decode(doc)).is_ready());
    }
}
