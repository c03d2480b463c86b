// ── Dish modules ──
//
// Each module decodes its own sub-section of the dish document. Modules
// over always-present top-level fields (Network, Antenna) are always
// ready; the rest go NotReady when their section is absent and stay that
// way -- the state is fixed at construction.

use skyprobe_telemetry::Section;

use crate::codes::{ActuatorState, ActuatorStatus, AttitudeEstimationState, OutageCause};
use crate::context::{ImageHandle, ReportContext};
use crate::report::{ReportSection, Rows};

/// Round to three decimals, mirroring the feed's display convention.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Link and point-of-presence throughput/latency stats.
#[derive(Debug, Clone)]
pub struct Network {
    ether_speed_mbps: i64,
    downlink_bps: f64,
    uplink_bps: f64,
    pop_ping_latency_ms: f64,
    pop_ping_drop_rate: f64,
    seconds_to_first_nonempty_slot: f64,
}

impl Network {
    pub fn decode(doc: Section<'_>) -> Self {
        Self {
            ether_speed_mbps: doc.i64_or("ethSpeedMbps", 100),
            downlink_bps: doc.f64_or("downlinkThroughputBps", 0.0),
            uplink_bps: doc.f64_or("uplinkThroughputBps", 0.0),
            pop_ping_latency_ms: doc.f64_or("popPingLatencyMs", 0.0),
            pop_ping_drop_rate: doc.f64_or("popPingDropRate", 0.0),
            seconds_to_first_nonempty_slot: doc.f64_or("secondsToFirstNonemptySlot", 0.0),
        }
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        // The slow-link verdict lives in the rendered string, not in state.
        let speed_note = if self.ether_speed_mbps < 1000 {
            "(slow, check your cable or device)"
        } else {
            "(nominal)"
        };
        let ether = format!("{} Mbps {}", self.ether_speed_mbps, ctx.text(speed_note));

        let mut rows = Rows::new(ctx);
        rows.text("Ethernet speed", ether);
        rows.text("Downlink Throughput, Kbps", round3(self.downlink_bps / 1024.0));
        rows.text("Uplink Throughput, Kbps", round3(self.uplink_bps / 1024.0));
        rows.text("PoP ping latency, ms", round3(self.pop_ping_latency_ms));
        rows.text("PoP ping drop rate", self.pop_ping_drop_rate);
        rows.text(
            "Seconds to first non-empty slot",
            self.seconds_to_first_nonempty_slot,
        );
        rows.into_section("Network")
    }
}

/// GPS fix quality (`gpsStats`).
#[derive(Debug, Clone, Default)]
pub struct Gps {
    ready: bool,
    valid: bool,
    sats: i64,
    no_sats_after_first_fix: bool,
    inhibit: bool,
}

impl Gps {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(stats) = doc.child("gpsStats") else {
            return Self::default();
        };

        Self {
            ready: true,
            valid: stats.bool_or("gpsValid", false),
            sats: stats.i64_or("gpsSats", 0),
            no_sats_after_first_fix: stats.bool_or("noSatsAfterTtff", false),
            inhibit: stats.bool_or("inhibitGps", false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.yes_no("GPS valid", self.valid);
        rows.text("GPS satellites", self.sats);
        rows.yes_no("No GPS satellites after first fix", self.no_sats_after_first_fix);
        rows.yes_no("Don't trust the dish GPS", self.inhibit);
        rows.into_section("GPS")
    }
}

/// Basic antenna signal readings, from always-present top-level fields.
#[derive(Debug, Clone)]
pub struct Antenna {
    snr_above_noise_floor: bool,
    snr_persistently_low: bool,
    boresight_azimuth_deg: f64,
    boresight_elevation_deg: f64,
}

impl Antenna {
    pub fn decode(doc: Section<'_>) -> Self {
        Self {
            snr_above_noise_floor: doc.bool_or("isSnrAboveNoiseFloor", false),
            snr_persistently_low: doc.bool_or("isSnrPersistentlyLow", false),
            boresight_azimuth_deg: doc.f64_or("boresightAzimuthDeg", 0.0),
            boresight_elevation_deg: doc.f64_or("boresightElevationDeg", 0.0),
        }
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        // Signal quality is a boolean rendered Good/Bad, not a number.
        let level = ctx.text(if self.snr_above_noise_floor { "Good" } else { "Bad" });

        let mut rows = Rows::new(ctx);
        rows.text("Signal level", level);
        rows.yes_no("SNR persistently low", self.snr_persistently_low);
        rows.text("Panel boresight Azimuth angle, deg", self.boresight_azimuth_deg);
        rows.text(
            "Panel boresight Elevation angle, deg",
            self.boresight_elevation_deg,
        );
        rows.into_section("Antenna")
    }
}

/// Mechanical alignment statistics (`alignmentStats`).
#[derive(Debug, Clone)]
pub struct Alignment {
    ready: bool,
    actuators: ActuatorStatus,
    actuator_state: ActuatorState,
    tilt_angle_deg: f64,
    boresight_azimuth_deg: f64,
    boresight_elevation_deg: f64,
    desired_boresight_azimuth_deg: f64,
    desired_boresight_elevation_deg: f64,
    attitude_estimation: AttitudeEstimationState,
    attitude_uncertainty_deg: f64,
}

impl Alignment {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(stats) = doc.child("alignmentStats") else {
            return Self {
                ready: false,
                actuators: ActuatorStatus::Unknown,
                actuator_state: ActuatorState::Idle,
                tilt_angle_deg: 0.0,
                boresight_azimuth_deg: 0.0,
                boresight_elevation_deg: 0.0,
                desired_boresight_azimuth_deg: 0.0,
                desired_boresight_elevation_deg: 0.0,
                attitude_estimation: AttitudeEstimationState::Reset,
                attitude_uncertainty_deg: 0.0,
            };
        };

        Self {
            ready: true,
            actuators: ActuatorStatus::from_code(stats.i64_or("hasActuators", 0)),
            actuator_state: ActuatorState::from_code(stats.i64_or("actuatorState", 0)),
            tilt_angle_deg: stats.f64_or("tiltAngleDeg", 0.0),
            boresight_azimuth_deg: stats.f64_or("boresightAzimuthDeg", 0.0),
            boresight_elevation_deg: stats.f64_or("boresightElevationDeg", 0.0),
            desired_boresight_azimuth_deg: stats.f64_or("desiredBoresightAzimuthDeg", 0.0),
            desired_boresight_elevation_deg: stats.f64_or("desiredBoresightElevationDeg", 0.0),
            attitude_estimation: AttitudeEstimationState::from_code(
                stats.i64_or("attitudeEstimationState", 0),
            ),
            attitude_uncertainty_deg: stats.f64_or("attitudeUncertaintyDeg", 0.0),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.text("Actuators", ctx.text(self.actuators.label()));
        rows.text("Actuator state", ctx.text(self.actuator_state.label()));
        rows.text("Tilt angle, deg", self.tilt_angle_deg);
        rows.text("Panel boresight Azimuth angle, deg", self.boresight_azimuth_deg);
        rows.text(
            "Panel boresight Elevation angle, deg",
            self.boresight_elevation_deg,
        );
        rows.text(
            "Panel desired boresight Azimuth angle, deg",
            self.desired_boresight_azimuth_deg,
        );
        rows.text(
            "Panel desired boresight Elevation angle, deg",
            self.desired_boresight_elevation_deg,
        );
        rows.text(
            "Attitude Estimation State",
            ctx.text(self.attitude_estimation.label()),
        );
        rows.text("Attitude Uncertainty, deg", self.attitude_uncertainty_deg);
        rows.into_section("Alignment")
    }
}

/// Boot-time initialization durations, seconds per milestone.
#[derive(Debug, Clone)]
struct InitDurations {
    rf_ready: f64,
    gps_valid: f64,
    burst_detected: f64,
    initial_network_entry: f64,
    first_cplane: f64,
    network_schedule: f64,
    first_pop_ping: f64,
    attitude_initialization: f64,
    ekf_converged: f64,
    stable_connection: f64,
}

impl InitDurations {
    fn decode(section: Section<'_>) -> Self {
        Self {
            rf_ready: section.f64_or("rfReady", 0.0),
            gps_valid: section.f64_or("gpsValid", 0.0),
            burst_detected: section.f64_or("burstDetected", 0.0),
            initial_network_entry: section.f64_or("initialNetworkEntry", 0.0),
            first_cplane: section.f64_or("firstCplane", 0.0),
            network_schedule: section.f64_or("networkSchedule", 0.0),
            first_pop_ping: section.f64_or("firstPopPing", 0.0),
            attitude_initialization: section.f64_or("attitudeInitialization", 0.0),
            ekf_converged: section.f64_or("ekfConverged", 0.0),
            stable_connection: section.f64_or("stableConnection", 0.0),
        }
    }
}

/// Subsystem readiness flags (`readyStates`) plus optional init durations.
#[derive(Debug, Clone, Default)]
pub struct ReadyStates {
    ready: bool,
    cady: bool,
    scp: bool,
    l1l2: bool,
    xphy: bool,
    aap: bool,
    rf: bool,
    init_durations: Option<InitDurations>,
}

impl ReadyStates {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(states) = doc.child("readyStates") else {
            return Self::default();
        };

        Self {
            ready: true,
            cady: states.bool_or("cady", false),
            scp: states.bool_or("scp", false),
            l1l2: states.bool_or("l1l2", false),
            xphy: states.bool_or("xphy", false),
            aap: states.bool_or("aap", false),
            rf: states.bool_or("rf", false),
            // Durations ride alongside readyStates at the top level.
            init_durations: doc
                .child("initializationDurationSeconds")
                .map(InitDurations::decode),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.yes_no("Clock generator", self.cady);
        rows.yes_no("RFFE bus interface", self.scp);
        rows.yes_no("Modem L1L2", self.l1l2);
        rows.yes_no("Xilinx XPHY interface", self.xphy);
        rows.yes_no("Digital beamformers", self.aap);
        rows.yes_no("RF front end", self.rf);

        if let Some(d) = &self.init_durations {
            let sec = ctx.text("sec");
            let mut duration = |label: &str, value: f64| {
                rows.text(label, format!("{value} {sec}"));
            };
            duration("RF front end ready", d.rf_ready);
            duration("GPS fixed (valid)", d.gps_valid);
            duration("Satellite signal detected", d.burst_detected);
            duration("Initial network entry", d.initial_network_entry);
            duration("First control plane", d.first_cplane);
            duration("Network schedule", d.network_schedule);
            duration("First PoP ping", d.first_pop_ping);
            duration("Attitude initialized", d.attitude_initialization);
            duration("Extended Kalman filter converged", d.ekf_converged);
            duration("Stable connection", d.stable_connection);
        }

        rows.into_section("Ready states")
    }
}

/// Most recent outage (`outage`).
#[derive(Debug, Clone)]
pub struct Outage {
    ready: bool,
    cause: OutageCause,
    start_timestamp_ns: i64,
    duration_ns: i64,
    did_switch: bool,
}

impl Outage {
    pub fn decode(doc: Section<'_>) -> Self {
        let Some(outage) = doc.child("outage") else {
            return Self {
                ready: false,
                cause: OutageCause::Unknown,
                start_timestamp_ns: 0,
                duration_ns: 0,
                did_switch: false,
            };
        };

        Self {
            ready: true,
            cause: OutageCause::from_code(outage.i64_or("cause", 0)),
            start_timestamp_ns: outage.i64_or("startTimestampNs", 0),
            duration_ns: outage.i64_or("durationNs", 0),
            did_switch: outage.bool_or("didSwitch", false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.text("Cause", ctx.text(self.cause.label()));
        rows.text("Start timestamp, ns", self.start_timestamp_ns);
        rows.text("Duration, ns", self.duration_ns);
        rows.yes_no("Did switch", self.did_switch);
        rows.into_section("Outage")
    }
}

/// Sky-view obstruction statistics (`obstructionStats`), with an optional
/// rasterized compass-wedge map generated at construction time.
#[derive(Debug, Clone, Default)]
pub struct Obstructions {
    ready: bool,
    currently_obstructed: bool,
    fraction_obstructed: f64,
    time_obstructed: f64,
    valid_s: f64,
    patches_valid: i64,
    avg_prolonged_duration_s: f64,
    avg_prolonged_interval_s: f64,
    avg_prolonged_valid: bool,
    image: Option<ImageHandle>,
}

impl Obstructions {
    pub fn decode(doc: Section<'_>, ctx: &ReportContext<'_>) -> Self {
        let Some(stats) = doc.child("obstructionStats") else {
            return Self::default();
        };

        let wedge_fractions: Vec<f64> = stats
            .list("wedgeFractionObstructedList")
            .iter()
            .filter_map(serde_json::Value::as_f64)
            .collect();

        let image = if wedge_fractions.is_empty() {
            None
        } else {
            ctx.rasterize(&wedge_fractions)
        };

        Self {
            ready: true,
            currently_obstructed: stats.bool_or("currentlyObstructed", false),
            fraction_obstructed: stats.f64_or("fractionObstructed", 0.0),
            time_obstructed: stats.f64_or("timeObstructed", 0.0),
            valid_s: stats.f64_or("validS", 0.0),
            patches_valid: stats.i64_or("patchesValid", 0),
            avg_prolonged_duration_s: stats.f64_or("avgProlongedObstructionDurationS", 0.0),
            avg_prolonged_interval_s: stats.f64_or("avgProlongedObstructionIntervalS", 0.0),
            avg_prolonged_valid: stats.bool_or("avgProlongedObstructionValid", false),
            image,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn section(&self, ctx: &ReportContext<'_>) -> ReportSection {
        let mut rows = Rows::new(ctx);
        rows.yes_no("Currently obstructed", self.currently_obstructed);
        rows.text("Fraction obstructed", self.fraction_obstructed);
        rows.text("Time obstructed", self.time_obstructed);
        rows.text("Time valid, sec", self.valid_s);
        rows.text("Patches valid", self.patches_valid);
        rows.text(
            "Average prolonged obstruction duration, sec",
            self.avg_prolonged_duration_s,
        );
        rows.text(
            "Average prolonged obstruction interval, sec",
            self.avg_prolonged_interval_s,
        );
        rows.yes_no("Average prolonged obstruction valid", self.avg_prolonged_valid);

        if let Some(image) = &self.image {
            rows.image("Obstruction map", image.clone());
        }

        rows.into_section("Obstructions")
    }
}
