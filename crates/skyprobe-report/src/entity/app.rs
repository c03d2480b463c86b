// ── Companion-app entity ──
//
// The app snapshot always comes from the device the report runs against,
// so the entity itself is always reachable and always local. How much it
// can tell us depends on the platform: native apps (iOS, Android) report
// the host device too, web and unknown platforms stop at the app itself.

use indexmap::IndexMap;
use skyprobe_telemetry::Section;

use crate::codes::AppPlatform;
use crate::context::ReportContext;
use crate::entity::format_epoch;
use crate::error::ReportError;
use crate::module::{Module, app};
use crate::report::{AccessMode, DeviceReport, EntityKind, Rows};

const ENTITY: &str = "Local device";

/// Build the companion-app report. The `app` sub-document is mandatory.
pub fn report(
    doc: Section<'_>,
    ctx: &ReportContext<'_>,
) -> Result<DeviceReport, ReportError> {
    let app_info = doc
        .child("app")
        .ok_or_else(|| ReportError::missing(ENTITY, "app"))?;

    let platform = AppPlatform::from_os(&doc.child("platform").map_or_else(
        || "unknown".to_owned(),
        |p| p.str_or("os", "unknown"),
    ));

    let mut rows = Rows::new(ctx);
    rows.text("App version", app_info.str_or("version", "Unknown"));
    rows.text("App environment", app_info.str_or("environment", "Unknown"));
    rows.text("App build", app_info.str_or("build", ""));
    rows.text("App hash", app_info.str_or("hash", ""));
    rows.text("App timestamp", format_epoch(app_info.i64_or("timestamp", 0)));
    rows.spacer();
    rows.text("Platform OS", platform.os_name());

    if platform.is_native() {
        let os_version = doc
            .child("platform")
            .map_or_else(String::new, |p| p.str_or("version", ""));

        rows.text("Platform OS version", os_version);
        rows.text("Device", doc.str_or("name", ""));
        rows.text("Device model", doc.str_or("model", ""));
        rows.text("Device id", doc.str_or("deviceId", ""));
        rows.spacer();
        rows.text("Device timestamp", format_epoch(doc.i64_or("timestamp", 0)));
        rows.text("Device uptime", doc.i64_or("uptime", 0));

        // The app omits the wifi block when it has no permission to read it.
        let (wifi_ip, wifi_ssid) = match doc.child("wifi") {
            Some(wifi) => (wifi.str_or("ipAddress", "0.0.0.0"), wifi.str_or("ssid", "")),
            None => (ctx.text("unknown"), ctx.text("unknown")),
        };
        rows.text("WiFi IP address", wifi_ip);
        rows.text("WiFi SSID", wifi_ssid);
    }

    let modules = if platform.is_native() {
        let modules = [
            Module::AppNetwork(app::AppNetwork::decode(doc)),
            Module::Sensors(app::Sensors::decode(doc)),
        ];
        modules
            .into_iter()
            .filter(Module::is_ready)
            .map(|m| (m.name().to_owned(), m.section(ctx)))
            .collect()
    } else {
        IndexMap::new()
    };

    Ok(DeviceReport {
        kind: EntityKind::LocalDevice,
        display_name: ctx.text(ENTITY),
        reachable: true,
        access: AccessMode::Local,
        sx_device: false,
        image: platform.image(),
        primary: rows.into_rows(),
        modules,
    })
}
