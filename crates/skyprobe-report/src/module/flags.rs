// ── Flag-scan modules (Alerts / Config / Features) ──
//
// Three sections share one shape: a flat mapping of boolean flags. Every
// flag that is set becomes one row, its camelCase key expanded into a
// spaced, capitalized phrase. A section with nothing set (or absent
// entirely) renders a single sentinel row rather than an empty section.

use serde_json::Value;
use skyprobe_telemetry::Section;

use crate::context::ReportContext;
use crate::report::{ReportSection, Rows};

#[derive(Debug, Clone)]
pub struct FlagScan {
    phrases: Vec<String>,
    sentinel: &'static str,
}

impl FlagScan {
    /// Active device alerts (`alerts`).
    pub fn alerts(doc: Section<'_>) -> Self {
        Self::scan(doc, "alerts", "No alerts")
    }

    /// Device configuration flags (`config`).
    pub fn config(doc: Section<'_>) -> Self {
        Self::scan(doc, "config", "No config flags set")
    }

    /// Enabled firmware features (`features`).
    pub fn features(doc: Section<'_>) -> Self {
        Self::scan(doc, "features", "No features enabled")
    }

    fn scan(doc: Section<'_>, key: &str, sentinel: &'static str) -> Self {
        let phrases = doc
            .child(key)
            .map(|flags| {
                flags
                    .entries()
                    .filter(|(_, v)| matches!(v, Value::Bool(true)))
                    .map(|(flag, _)| camel_phrase(flag))
                    .collect()
            })
            .unwrap_or_default();

        Self { phrases, sentinel }
    }

    pub fn section(&self, ctx: &ReportContext<'_>, title: &str) -> ReportSection {
        let mut rows = Rows::new(ctx);

        if self.phrases.is_empty() {
            rows.text(" ", ctx.text(self.sentinel));
        } else {
            for phrase in &self.phrases {
                rows.text(" ", phrase);
            }
        }

        rows.into_section(title)
    }
}

/// Expand a camelCase flag key into a spaced phrase with every token
/// capitalized: `powerSupplyThermalThrottle` becomes "Power Supply Thermal
/// Throttle". Tokens split on lowercase-to-uppercase boundaries only.
fn camel_phrase(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in key.chars() {
        if prev_lower && ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
