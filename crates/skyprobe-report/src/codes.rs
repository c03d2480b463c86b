// ── Coded-enum lookup tables ──
//
// Closed sets of integer codes from the vendor feed, each mapped to a
// display label. Decoding an out-of-range code is never an error: every
// enum resolves unknown codes to its documented default variant. Labels
// are exhaustive matches so a new variant cannot ship without one.

use serde::Serialize;

/// Dish mobility classification (`mobilityClass`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MobilityClass {
    Stationary,
    Nomadic,
    Mobile,
    Unknown,
}

impl MobilityClass {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Stationary,
            1 => Self::Nomadic,
            2 => Self::Mobile,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stationary => "Stationary",
            Self::Nomadic => "Nomadic",
            Self::Mobile => "Mobile",
            Self::Unknown => "Unknown",
        }
    }
}

/// Subscription tier (`classOfService`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceClass {
    Unknown,
    Consumer,
    Business,
    BusinessPlus,
    CommercialAviation,
}

impl ServiceClass {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Consumer,
            2 => Self::Business,
            3 => Self::BusinessPlus,
            4 => Self::CommercialAviation,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Consumer => "Consumer",
            Self::Business => "Business",
            Self::BusinessPlus => "Business Plus",
            Self::CommercialAviation => "Commercial Aviation",
        }
    }
}

/// Firmware update pipeline state (`softwareUpdateState`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SoftwareUpdateState {
    Unknown,
    Idle,
    Fetching,
    PreCheck,
    Writing,
    PostCheck,
    RebootRequired,
    Disabled,
    Faulted,
}

impl SoftwareUpdateState {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Idle,
            2 => Self::Fetching,
            3 => Self::PreCheck,
            4 => Self::Writing,
            5 => Self::PostCheck,
            6 => Self::RebootRequired,
            7 => Self::Disabled,
            8 => Self::Faulted,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Idle => "Idle",
            Self::Fetching => "Fetching",
            Self::PreCheck => "Pre Check",
            Self::Writing => "Writing",
            Self::PostCheck => "Post Check",
            Self::RebootRequired => "Reboot required",
            Self::Disabled => "Disabled",
            Self::Faulted => "Faulted",
        }
    }
}

/// Whether the panel has motorized actuators (`hasActuators`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActuatorStatus {
    Unknown,
    HasActuators,
    NoActuators,
}

impl ActuatorStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::HasActuators,
            2 => Self::NoActuators,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::HasActuators => "Has Actuators",
            Self::NoActuators => "No Actuators",
        }
    }
}

/// Actuator motion state (`actuatorState`). Defaults to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActuatorState {
    Idle,
    FullTilt,
    Rotate,
    Tilt,
    UnwrapPositive,
    UnwrapNegative,
    TiltToStowed,
    Faulted,
    WaitTilStatic,
    DriveToMobilePosition,
    MobileWait,
}

impl ActuatorState {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::FullTilt,
            2 => Self::Rotate,
            3 => Self::Tilt,
            4 => Self::UnwrapPositive,
            5 => Self::UnwrapNegative,
            6 => Self::TiltToStowed,
            7 => Self::Faulted,
            8 => Self::WaitTilStatic,
            9 => Self::DriveToMobilePosition,
            10 => Self::MobileWait,
            _ => Self::Idle,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::FullTilt => "Full tilt",
            Self::Rotate => "Rotating",
            Self::Tilt => "Tilting",
            Self::UnwrapPositive => "Unwrapping (positive)",
            Self::UnwrapNegative => "Unwrapping (negative)",
            Self::TiltToStowed => "Tilt to stowed",
            Self::Faulted => "Faulted",
            Self::WaitTilStatic => "Waiting for static",
            Self::DriveToMobilePosition => "Driving to mobile position",
            Self::MobileWait => "Waiting for mobile",
        }
    }
}

/// Attitude filter state (`attitudeEstimationState`). Defaults to `Reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttitudeEstimationState {
    Reset,
    Unconverged,
    Converged,
    Faulted,
    Invalid,
}

impl AttitudeEstimationState {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Unconverged,
            2 => Self::Converged,
            3 => Self::Faulted,
            4 => Self::Invalid,
            _ => Self::Reset,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Unconverged => "Unconverged",
            Self::Converged => "Converged",
            Self::Faulted => "Faulted",
            Self::Invalid => "Invalid",
        }
    }
}

/// Why service is disabled, if it is (`disablementCode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisablementCode {
    Unknown,
    Okay,
    NoActiveAccount,
    TooFarFromServiceAddress,
    InOcean,
    InvalidCountry,
    BlockedCountry,
    DataOverageSandboxPolicy,
}

impl DisablementCode {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Okay,
            2 => Self::NoActiveAccount,
            3 => Self::TooFarFromServiceAddress,
            4 => Self::InOcean,
            5 => Self::InvalidCountry,
            6 => Self::BlockedCountry,
            7 => Self::DataOverageSandboxPolicy,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown, presumably active",
            Self::Okay => "Okay",
            Self::NoActiveAccount => "No active account",
            Self::TooFarFromServiceAddress => "Too far from service address",
            Self::InOcean => "In ocean",
            Self::InvalidCountry => "Invalid country",
            Self::BlockedCountry => "Blocked country",
            Self::DataOverageSandboxPolicy => "Data overage sandbox policy",
        }
    }
}

/// Cause of the most recent service outage (`outage.cause`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutageCause {
    Unknown,
    Booting,
    Stowed,
    ThermalShutdown,
    NoSchedule,
    NoSats,
    Obstructed,
    NoDownlink,
    NoPings,
    ActuatorActivity,
    CableTest,
    Sleeping,
    MovingWhileNotAllowed,
}

impl OutageCause {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Booting,
            2 => Self::Stowed,
            3 => Self::ThermalShutdown,
            4 => Self::NoSchedule,
            5 => Self::NoSats,
            6 => Self::Obstructed,
            7 => Self::NoDownlink,
            8 => Self::NoPings,
            9 => Self::ActuatorActivity,
            10 => Self::CableTest,
            11 => Self::Sleeping,
            12 => Self::MovingWhileNotAllowed,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Booting => "Booting",
            Self::Stowed => "Stowed",
            Self::ThermalShutdown => "Thermal shutdown",
            Self::NoSchedule => "No schedule",
            Self::NoSats => "No satellites",
            Self::Obstructed => "Obstructed",
            Self::NoDownlink => "No downlink",
            Self::NoPings => "No pings",
            Self::ActuatorActivity => "Activity of the actuator",
            Self::CableTest => "Cable test is running",
            Self::Sleeping => "Sleeping",
            Self::MovingWhileNotAllowed => "Moving while not allowed",
        }
    }
}

/// Router reboot reason (`boot.lastReason` and the per-reason history map).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BootReason {
    #[default]
    Unknown,
    Forgotten,
    PowerCycle,
    Command,
    SoftwareUpdate,
    ConfigUpdate,
    UptimeFdir,
    RepeaterFdir,
    AviationEthWanFdir,
    KernelPanic,
    Aviation5mOutageFdir,
}

impl BootReason {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Forgotten,
            2 => Self::PowerCycle,
            3 => Self::Command,
            4 => Self::SoftwareUpdate,
            5 => Self::ConfigUpdate,
            6 => Self::UptimeFdir,
            7 => Self::RepeaterFdir,
            8 => Self::AviationEthWanFdir,
            9 => Self::KernelPanic,
            10 => Self::Aviation5mOutageFdir,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Forgotten => "Forgotten",
            Self::PowerCycle => "Power cycle",
            Self::Command => "Command",
            Self::SoftwareUpdate => "Software update",
            Self::ConfigUpdate => "Configuration update",
            Self::UptimeFdir => "Uptime FDIR",
            Self::RepeaterFdir => "Repeater FDIR",
            Self::AviationEthWanFdir => "Aviation Ethernet WAN FDIR",
            Self::KernelPanic => "Kernel panic",
            Self::Aviation5mOutageFdir => "Aviation 5-minute outage FDIR",
        }
    }
}

/// Companion-app host platform. String-coded rather than integer-coded,
/// but follows the same default-on-unknown contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppPlatform {
    Ios,
    Android,
    Web,
    Unknown,
}

impl AppPlatform {
    pub fn from_os(os: &str) -> Self {
        match os {
            "ios" => Self::Ios,
            "android" => Self::Android,
            "web" => Self::Web,
            _ => Self::Unknown,
        }
    }

    /// Native platforms carry device/network/sensor data; `web` and
    /// `unknown` snapshots omit that whole shape.
    pub fn is_native(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }

    pub fn os_name(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
            Self::Unknown => "unknown",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            Self::Ios => "ios_app",
            Self::Android => "android_app",
            Self::Web => "web_app",
            Self::Unknown => "unknown_app",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_declared_variants() {
        assert_eq!(MobilityClass::from_code(0), MobilityClass::Stationary);
        assert_eq!(MobilityClass::from_code(2), MobilityClass::Mobile);
        assert_eq!(ServiceClass::from_code(3), ServiceClass::BusinessPlus);
        assert_eq!(
            SoftwareUpdateState::from_code(6),
            SoftwareUpdateState::RebootRequired
        );
        assert_eq!(ActuatorStatus::from_code(2), ActuatorStatus::NoActuators);
        assert_eq!(ActuatorState::from_code(9), ActuatorState::DriveToMobilePosition);
        assert_eq!(
            AttitudeEstimationState::from_code(2),
            AttitudeEstimationState::Converged
        );
        assert_eq!(DisablementCode::from_code(4), DisablementCode::InOcean);
        assert_eq!(OutageCause::from_code(3), OutageCause::ThermalShutdown);
        assert_eq!(BootReason::from_code(9), BootReason::KernelPanic);
    }

    #[test]
    fn out_of_range_codes_resolve_to_defaults_not_errors() {
        // Negative, just-past-the-end, and far-out values all hit the
        // documented default variant.
        for code in [-1, 101, i64::MAX] {
            assert_eq!(MobilityClass::from_code(code), MobilityClass::Unknown);
            assert_eq!(ServiceClass::from_code(code), ServiceClass::Unknown);
            assert_eq!(
                SoftwareUpdateState::from_code(code),
                SoftwareUpdateState::Unknown
            );
            assert_eq!(ActuatorStatus::from_code(code), ActuatorStatus::Unknown);
            assert_eq!(ActuatorState::from_code(code), ActuatorState::Idle);
            assert_eq!(
                AttitudeEstimationState::from_code(code),
                AttitudeEstimationState::Reset
            );
            assert_eq!(DisablementCode::from_code(code), DisablementCode::Unknown);
            assert_eq!(OutageCause::from_code(code), OutageCause::Unknown);
            assert_eq!(BootReason::from_code(code), BootReason::Unknown);
        }
    }

    #[test]
    fn historical_sentinel_code_for_mobility_is_unknown() {
        // The feed uses 100 as an explicit "unknown" marker.
        assert_eq!(MobilityClass::from_code(100), MobilityClass::Unknown);
    }

    #[test]
    fn app_platform_from_os_string() {
        assert_eq!(AppPlatform::from_os("ios"), AppPlatform::Ios);
        assert_eq!(AppPlatform::from_os("android"), AppPlatform::Android);
        assert_eq!(AppPlatform::from_os("web"), AppPlatform::Web);
        assert_eq!(AppPlatform::from_os("solaris"), AppPlatform::Unknown);

        assert!(AppPlatform::Ios.is_native());
        assert!(AppPlatform::Android.is_native());
        assert!(!AppPlatform::Web.is_native());
        assert!(!AppPlatform::Unknown.is_native());
    }

    #[test]
    fn labels_cover_every_variant() {
        assert_eq!(DisablementCode::Unknown.label(), "Unknown, presumably active");
        assert_eq!(OutageCause::ActuatorActivity.label(), "Activity of the actuator");
        assert_eq!(BootReason::ConfigUpdate.label(), "Configuration update");
        assert_eq!(ActuatorState::UnwrapNegative.label(), "Unwrapping (negative)");
    }
}
