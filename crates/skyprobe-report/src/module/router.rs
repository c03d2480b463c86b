// ── Router modules ──

use skyprobe_telemetry::Section;

use crate::codes::BootReason;
use crate::context::ReportContext;
use crate::report::{ReportSection, Rows};

/// WAN addressing and ping health, from always-present top-level fields.
#[derive(Debug, Clone)]
pub struct WanNetwork {
    ipv4_wan_address: String,
    ipv6_wan_addresses: Vec<String>,
    ping_drop_rate: f64,
    dish_ping_drop_rate: f64,
    dish_ping_latency_ms: f64,
    pop_ping_drop_rate: f64,
    pop_ping_latency_ms: f64,
}

impl WanNetwork {
    pub fn decode(doc: Section<'_>) -> Self {
        Self {
            ipv4_wan_address: doc.str_or("ipv4WanAddress", "0.0.0.0"),
            ipv6_wan_addresses: doc
                .list("ipv6WanAddressesList")
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect(),
            ping_drop_rate: doc.f64_or("pingDropRate", 0.0),
            dish_ping_drop_rate: doc.f64_or("dishPingDropRate", 0.0),
            dish_ping_latency_ms: doc.f64_or("dishPingLatencyMs", 0.0),
            pop_ping_drop_rate: doc.f64_or("popPingDropRate", 0.0),
            pop_ping_latency_ms: doc.f64_or("popPingLatencyMs", 0.0),
        }
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.text("WAN IPv4", &self.ipv4_wan_address);
        rows.text("WAN IPv6", self.ipv6_wan_addresses.join(", "));
        rows.text("Ping drop rate", self.ping_drop_rate);
        rows.text("Dish ping drop rate", self.dish_ping_drop_rate);
        rows.text("Dish ping latency, ms", self.dish_ping_latency_ms);
        rows.text("PoP ping drop rate", self.pop_ping_drop_rate);
        rows.text("PoP ping latency, ms", self.pop_ping_latency_ms);
        rows.into_section("Network")
    }
}

/// Reboot accounting from `deviceInfo.boot`: last reason, running count,
/// and the per-reason histogram.
#[derive(Debug, Clone, Default)]
pub struct BootInfo {
    ready: bool,
    last_reason: BootReason,
    last_count: i64,
    count_by_reason: Vec<(BootReason, i64)>,
}

impl BootInfo {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(boot) = doc.child("deviceInfo").and_then(|info| info.child("boot")) else {
            return Self::default();
        };

        // countByReasonMap arrives as a list of [code, count] pairs.
        let count_by_reason = boot
            .list("countByReasonMap")
            .iter()
            .filter_map(|entry| {
                let pair = entry.as_array()?;
                let code = pair.first()?.as_i64()?;
                let count = pair.get(1)?.as_i64()?;
                Some((BootReason::from_code(code), count))
            })
            .collect();

        Self {
            ready: true,
            last_reason: BootReason::from_code(boot.i64_or("lastReason", 0)),
            last_count: boot.i64_or("lastCount", 0),
            count_by_reason,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.text("Last reboot reason", ctx.text(self.last_reason.label()));
        rows.text("Last boot count", self.last_count);
        for (reason, count) in &self.count_by_reason {
            rows.text(
                &format!("{}: {}", ctx.text("Reason"), ctx.text(reason.label())),
                format!("{} {count}", ctx.text("count by this reason:")),
            );
        }
        rows.into_section("Boot info")
    }
}
