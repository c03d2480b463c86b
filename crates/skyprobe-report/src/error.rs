// ── Report error types ──
//
// There is exactly one fatal condition in this crate: a section an entity
// declares mandatory is missing from the snapshot. Everything else --
// absent optional sections, absent fields, out-of-range enum codes --
// degrades to defaults and is never surfaced as an error.

use thiserror::Error;

/// Unified error type for report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// A mandatory sub-document is absent. Aborts the whole report; there
    /// is no partial-report mode.
    #[error("cannot build {entity} report: mandatory section `{section}` is missing")]
    MissingSection {
        entity: &'static str,
        section: &'static str,
    },
}

impl ReportError {
    pub(crate) fn missing(entity: &'static str, section: &'static str) -> Self {
        Self::MissingSection { entity, section }
    }
}
