//! Entity report builders.
//!
//! One builder per device flavor. Each takes the entity's unwrapped
//! sub-document and produces a [`DeviceReport`](crate::report::DeviceReport)
//! with primary attributes and ready modules, or fails when a mandatory
//! sub-document is missing. An unreachable entity short-circuits to a
//! header-only report.

pub mod about;
pub mod app;
pub mod dish;
pub mod router;

use chrono::DateTime;

/// Render a unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` UTC.
/// Out-of-range values read as "Unknown".
pub(crate) fn format_epoch(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Unknown".to_owned(),
    }
}

/// Render a UTC offset in seconds as a `GMT<hours>` zone tag.
pub(crate) fn gmt_zone(utc_offset_s: i64) -> String {
    format!("GMT{}", utc_offset_s / 3600)
}
