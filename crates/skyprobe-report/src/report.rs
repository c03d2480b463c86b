// ── Report output model ──
//
// The ordered structures handed to the presentation layer. Insertion order
// of primary rows and of modules is significant and must survive
// serialization, hence `Vec` + `IndexMap` rather than any sorted map.

use indexmap::IndexMap;
use serde::Serialize;

use crate::context::{ImageHandle, ReportContext};

/// Which top-level device a report describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Dish,
    Router,
    LocalDevice,
    About,
}

/// Access path to the device, derived from the snapshot's `cloud` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessMode {
    Local,
    Remote,
}

impl AccessMode {
    pub fn from_cloud(cloud: bool) -> Self {
        if cloud { Self::Remote } else { Self::Local }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "Local access",
            Self::Remote => "Remote access",
        }
    }
}

/// A single rendered value: text, or an opaque image reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowValue {
    Text(String),
    Image(ImageHandle),
}

/// One label/value pair in a report. Spacer rows carry a blank label and
/// empty text; renderers turn them into visual gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub value: RowValue,
}

impl ReportRow {
    pub fn is_spacer(&self) -> bool {
        self.label.trim().is_empty() && matches!(&self.value, RowValue::Text(t) if t.is_empty())
    }
}

/// A named, ordered secondary section (one per ready module).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub rows: Vec<ReportRow>,
}

/// The full report for one entity, consumed by the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceReport {
    pub kind: EntityKind,
    /// Localized tab/display name.
    pub display_name: String,
    pub reachable: bool,
    pub access: AccessMode,
    /// Whether this is vendor hardware (drives the renderer's status line).
    pub sx_device: bool,
    /// Device-image selector key -- a lookup key, never image data.
    pub image: &'static str,
    /// Primary attributes, in fixed order.
    pub primary: Vec<ReportRow>,
    /// Module sections keyed by module name, in construction order.
    pub modules: IndexMap<String, ReportSection>,
}

/// Ordered row accumulator. Labels funnel through the context localizer;
/// blank labels (spacers) are passed through untouched.
pub struct Rows<'c> {
    ctx: &'c ReportContext<'c>,
    rows: Vec<ReportRow>,
}

impl<'c> Rows<'c> {
    pub fn new(ctx: &'c ReportContext<'c>) -> Self {
        Self {
            ctx,
            rows: Vec::new(),
        }
    }

    pub fn text(&mut self, label: &str, value: impl std::fmt::Display) {
        let label = if label.trim().is_empty() {
            label.to_owned()
        } else {
            self.ctx.text(label)
        };
        self.rows.push(ReportRow {
            label,
            value: RowValue::Text(value.to_string()),
        });
    }

    pub fn yes_no(&mut self, label: &str, value: bool) {
        let rendered = self.ctx.yes_no(value);
        self.text(label, rendered);
    }

    pub fn spacer(&mut self) {
        self.rows.push(ReportRow {
            label: " ".to_owned(),
            value: RowValue::Text(String::new()),
        });
    }

    pub fn image(&mut self, label: &str, handle: ImageHandle) {
        self.rows.push(ReportRow {
            label: self.ctx.text(label),
            value: RowValue::Image(handle),
        });
    }

    pub fn into_section(self, title: &str) -> ReportSection {
        ReportSection {
            title: self.ctx.text(title),
            rows: self.rows,
        }
    }

    pub fn into_rows(self) -> Vec<ReportRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn access_mode_from_cloud_flag() {
        assert_eq!(AccessMode::from_cloud(true), AccessMode::Remote);
        assert_eq!(AccessMode::from_cloud(false), AccessMode::Local);
        assert_eq!(AccessMode::Remote.label(), "Remote access");
    }

    #[test]
    fn rows_preserve_insertion_order() {
        let ctx = ReportContext::new();
        let mut rows = Rows::new(&ctx);
        rows.text("Boot count", 12);
        rows.spacer();
        rows.yes_no("Development hardware", false);

        let section = rows.into_section("Info");
        assert_eq!(section.title, "Info");
        assert_eq!(section.rows.len(), 3);
        assert_eq!(section.rows[0].label, "Boot count");
        assert_eq!(section.rows[0].value, RowValue::Text("12".into()));
        assert!(section.rows[1].is_spacer());
        assert_eq!(section.rows[2].value, RowValue::Text("No".into()));
    }

    #[test]
    fn image_rows_are_tagged_as_image_in_json() {
        let ctx = ReportContext::new();
        let mut rows = Rows::new(&ctx);
        rows.image("Obstruction map", crate::context::ImageHandle::new(vec![1u8, 2, 3]));

        let json = serde_json::to_value(rows.into_rows()).expect("serializable");
        assert_eq!(json[0]["value"]["image"], "3 bytes");
    }
}
