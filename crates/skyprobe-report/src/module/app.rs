// ── Companion-app modules ──
//
// These sections are reported by the phone app itself, so the payload is
// far less regular than the dish or router feeds. Every lookup here is
// best-effort with a default rather than an error.

use skyprobe_telemetry::Section;

use crate::context::ReportContext;
use crate::report::{ReportSection, Rows};

/// The phone's own network stack: connection type, addressing, and the
/// WiFi link details when the connection is WiFi.
#[derive(Debug, Clone, Default)]
pub struct AppNetwork {
    ready: bool,
    net_type: String,
    link_speed: String,
    is_vpn: bool,
    is_connected: bool,
    internet_available: bool,
    via_starlink: bool,
    bypass_mode: bool,
    ip_addr: String,
    gateway_ip: String,
    public_ip: String,
    wifi_ssid: String,
    wifi_bssid: String,
    wifi_frequency: String,
    wifi_signal: String,
}

impl AppNetwork {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(network) = doc.child("network") else {
            return Self::default();
        };

        let mut module = Self {
            ready: true,
            net_type: "wifi".to_owned(),
            is_vpn: network.bool_or("vpn", false),
            gateway_ip: network.str_or("gatewayIp", "0.0.0.0"),
            public_ip: network.str_or("publicIp", "0.0.0.0"),
            via_starlink: network.bool_or("starlink", false),
            ..Self::default()
        };

        if let Some(info) = network.child("netinfo") {
            module.net_type = info.str_or("type", "wifi");
            module.is_connected = info.bool_or("isConnected", false);
            module.internet_available = info.bool_or("isInternetReachable", false);
            // Disabling the router WiFi is how bypass mode manifests here.
            module.bypass_mode = !info.bool_or("isWifiEnabled", true);

            if let Some(details) = info.child("details") {
                module.ip_addr = details.str_or("ipAddress", "0.0.0.0");
                module.link_speed = format!("{} Mbps", details.i64_or("linkSpeed", 0));
                module.wifi_frequency = details.i64_or("frequency", 0).to_string();
                module.wifi_ssid = details.str_or("ssid", "");
                module.wifi_bssid = details.str_or("bssid", "");
                module.wifi_signal = details.i64_or("strength", 150).to_string();
            }
        }

        module
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.text("Local connection type", &self.net_type);
        rows.text("Local connection speed", &self.link_speed);
        rows.yes_no("Is VPN", self.is_vpn);
        rows.yes_no("Is connected", self.is_connected);
        rows.yes_no("Internet available", self.internet_available);
        rows.yes_no("Connected via Starlink", self.via_starlink);
        rows.yes_no("Starlink router bypass mode", self.bypass_mode);
        rows.text("Local IP address", &self.ip_addr);
        rows.text("Gateway IP address", &self.gateway_ip);
        rows.text("Public IP address", &self.public_ip);

        if self.net_type == "wifi" {
            rows.text("WiFi SSID", &self.wifi_ssid);
            rows.text("WiFi BSSID", &self.wifi_bssid);
            rows.text("WiFi frequency", &self.wifi_frequency);
            rows.text("WiFi signal strength", &self.wifi_signal);
        }

        rows.into_section("Network")
    }
}

/// Availability and activity of the phone's hardware sensors, one row
/// per sensor in the order the app reported them.
#[derive(Debug, Clone, Default)]
pub struct Sensors {
    ready: bool,
    sensors: Vec<(String, SensorState)>,
}

#[derive(Debug, Clone, Copy)]
struct SensorState {
    available: bool,
    active: bool,
}

impl Sensors {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(section) = doc.child("sensors") else {
            return Self::default();
        };

        let sensors = section
            .entries()
            .map(|(name, info)| {
                let state = SensorState {
                    available: info
                        .get("available")
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false),
                    active: info
                        .get("active")
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false),
                };
                (name.to_owned(), state)
            })
            .collect();

        Self { ready: true, sensors }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        for (name, state) in &self.sensors {
            rows.text(
                name,
                format!(
                    "{}: {}  {}: {}",
                    ctx.text("Available"),
                    ctx.yes_no(state.available),
                    ctx.text("Active"),
                    ctx.yes_no(state.active),
                ),
            );
        }
        rows.into_section("Sensors")
    }
}
