// ── Collaborator seams ──
//
// The core knows nothing about rendering surfaces. Two collaborators are
// injected per report generation: a label localizer (every user-facing
// label funnels through it) and an obstruction-map rasterizer whose output
// the core carries as an opaque handle without ever inspecting it.

use bytes::Bytes;
use serde::{Serialize, Serializer};

/// Pure label-lookup collaborator. The core is otherwise locale-agnostic.
pub trait Localize {
    fn text(&self, label: &str) -> String;
}

/// Pass-through localizer used when no translation catalog is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLocalizer;

impl Localize for IdentityLocalizer {
    fn text(&self, label: &str) -> String {
        label.to_owned()
    }
}

/// Pure drawing collaborator: per-wedge obstruction fractions (0.0–1.0,
/// one per 30° compass wedge) in, rendered image out.
pub trait ObstructionRasterizer {
    fn render(&self, wedge_fractions: &[f64]) -> ImageHandle;
}

/// Opaque rendered-image handle.
///
/// The core stores and forwards it; only the presentation layer knows what
/// the bytes mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle(Bytes);

impl ImageHandle {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self(data.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

// Serialized as a size marker only; the payload is presentation-layer data.
impl Serialize for ImageHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{} bytes", self.0.len()))
    }
}

static IDENTITY: IdentityLocalizer = IdentityLocalizer;

/// Per-generation collaborator bundle threaded through decode and render.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    localizer: &'a dyn Localize,
    rasterizer: Option<&'a dyn ObstructionRasterizer>,
}

impl<'a> ReportContext<'a> {
    /// Context with identity localization and no rasterizer; obstruction
    /// sections simply omit their image row.
    pub fn new() -> Self {
        Self {
            localizer: &IDENTITY,
            rasterizer: None,
        }
    }

    pub fn with_localizer(mut self, localizer: &'a dyn Localize) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn with_rasterizer(mut self, rasterizer: &'a dyn ObstructionRasterizer) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    /// Localize one user-facing label.
    pub fn text(&self, label: &str) -> String {
        self.localizer.text(label)
    }

    /// Localized Yes/No for a boolean field.
    pub fn yes_no(&self, value: bool) -> String {
        self.text(if value { "Yes" } else { "No" })
    }

    /// Rasterize a wedge-fraction list, if a rasterizer is wired in.
    pub fn rasterize(&self, wedge_fractions: &[f64]) -> Option<ImageHandle> {
        self.rasterizer.map(|r| r.render(wedge_fractions))
    }
}

impl Default for ReportContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReportContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportContext")
            .field("rasterizer", &self.rasterizer.is_some())
            .finish_non_exhaustive()
    }
}
