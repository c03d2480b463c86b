//! Report rendering: indented plain text or JSON.

use std::fmt::Write as _;
use std::io::{self, IsTerminal};

use owo_colors::OwoColorize;

use skyprobe_report::{DeviceReport, ReportRow, ReportSection, RowValue};

use crate::cli::ColorMode;
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Serialize the full report tree as pretty-printed JSON.
pub fn render_json(reports: &[DeviceReport]) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Render the report tree as indented text, one block per entity.
pub fn render_text(reports: &[DeviceReport], color: bool) -> String {
    let mut out = String::new();

    for report in reports {
        let header = format!("── {} ──", report.display_name);
        if color {
            let _ = writeln!(out, "{}", header.bold());
        } else {
            let _ = writeln!(out, "{header}");
        }

        let _ = writeln!(out, "{}", status_line(report, color));

        if !report.primary.is_empty() {
            out.push('\n');
            for row in &report.primary {
                push_row(&mut out, row, 2);
            }
        }

        for section in report.modules.values() {
            push_section(&mut out, section);
        }

        out.push('\n');
    }

    out
}

fn status_line(report: &DeviceReport, color: bool) -> String {
    let state = if report.reachable { "reachable" } else { "unreachable" };
    let state = if color {
        if report.reachable {
            state.green().to_string()
        } else {
            state.red().to_string()
        }
    } else {
        state.to_owned()
    };

    format!("{state} · {}", report.access.label())
}

fn push_section(out: &mut String, section: &ReportSection) {
    let _ = writeln!(out, "\n  [{}]", section.title);
    for row in &section.rows {
        push_row(out, row, 4);
    }
}

fn push_row(out: &mut String, row: &ReportRow, indent: usize) {
    if row.is_spacer() {
        out.push('\n');
        return;
    }

    let pad = " ".repeat(indent);
    match &row.value {
        RowValue::Text(text) => {
            if row.label.trim().is_empty() {
                let _ = writeln!(out, "{pad}{text}");
            } else {
                let _ = writeln!(out, "{pad}{}: {text}", row.label);
            }
        }
        RowValue::Image(handle) => {
            let _ = writeln!(out, "{pad}{}: [obstruction map: {} bytes]", row.label, handle.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use skyprobe_report::{ImageHandle, ObstructionRasterizer, ReportContext, assemble};
    use skyprobe_telemetry::Snapshot;

    use super::*;

    struct StubRasterizer;

    impl ObstructionRasterizer for StubRasterizer {
        fn render(&self, _wedge_fractions: &[f64]) -> ImageHandle {
            ImageHandle::new(vec![0u8; 128])
        }
    }

    fn reports(value: serde_json::Value) -> Vec<DeviceReport> {
        let snap = Snapshot::from_value(value).expect("object root");
        assemble(&snap, &ReportContext::new()).expect("assemble")
    }

    #[test]
    fn unreachable_entity_renders_header_and_status_only() {
        let text = render_text(
            &reports(json!({ "dish": { "reachable": false, "cloud": true } })),
            false,
        );

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("── Dish ──"));
        assert_eq!(lines.next(), Some("unreachable · Remote access"));
        assert_eq!(lines.next(), Some(""));
    }

    #[test]
    fn spacer_rows_become_blank_lines() {
        let text = render_text(
            &reports(json!({
                "router": {
                    "reachable": true,
                    "deviceInfo": { "hardwareVersion": "v2" },
                    "deviceState": { "uptimeS": 60 }
                }
            })),
            false,
        );

        assert!(text.contains("  Hardware revision: v2\n"));
        assert!(text.contains("  Uptime: 60 seconds\n"));
        // Spacer between the version block and the locale block.
        assert!(text.contains("  Software parts equal: No\n\n"));
        assert!(text.contains("\n  [Network]\n"));
    }

    #[test]
    fn image_rows_render_as_byte_counts() {
        let snap = Snapshot::from_value(json!({
            "dish": {
                "reachable": true,
                "deviceInfo": {},
                "obstructionStats": { "wedgeFractionObstructedList": [0.1, 0.2] }
            }
        }))
        .expect("object root");

        let raster = StubRasterizer;
        let ctx = ReportContext::new().with_rasterizer(&raster);
        let reports = assemble(&snap, &ctx).expect("assemble");

        let text = render_text(&reports, false);
        assert!(text.contains("    Obstruction map: [obstruction map: 128 bytes]\n"));
    }

    #[test]
    fn json_output_tags_images_and_keeps_entity_order() {
        let rendered = render_json(&reports(json!({
            "router": { "reachable": false },
            "dish": { "reachable": false }
        })))
        .expect("json");

        let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse back");
        let kinds: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .map(|r| r["kind"].as_str().expect("kind"))
            .collect();
        assert_eq!(kinds, ["Dish", "Router", "About"]);
    }
}
