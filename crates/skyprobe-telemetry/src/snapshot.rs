// ── Snapshot document wrapper ──
//
// Thin layer over `serde_json::Value` with best-effort typed accessors.
// Decoders higher up the stack never touch `Value` matching directly;
// they go through `Section` so the "absent key means default" contract
// lives in exactly one place.

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::SnapshotError;

/// Wrapper key some firmware versions insert between a device section and
/// its payload: `{"dish": {"status": {…}}}` vs `{"dish": {…}}`.
pub const ENVELOPE_KEY: &str = "status";

const EMPTY: &[Value] = &[];

/// One parsed telemetry snapshot document.
///
/// Owns the raw JSON tree for a single report generation. Top-level device
/// sections are handed out as borrowed [`Section`] views with the optional
/// `status` envelope already unwrapped.
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Map<String, Value>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn parse(text: &str) -> Result<Self, SnapshotError> {
        let snapshot = Self::from_value(serde_json::from_str(text)?)?;
        trace!(sections = snapshot.root.len(), "parsed snapshot document");
        Ok(snapshot)
    }

    /// Build a snapshot from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(SnapshotError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Look up a top-level device section, unwrapping the `status` envelope
    /// if present. Returns `None` when the key is absent or not an object.
    pub fn section(&self, key: &str) -> Option<Section<'_>> {
        let raw = self.root.get(key)?.as_object()?;
        Some(Section(unwrap_envelope(raw)))
    }

    /// Whether a top-level section key exists at all, regardless of shape.
    pub fn has_section(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }
}

/// Strip one optional `status` envelope level from a section object.
fn unwrap_envelope(obj: &Map<String, Value>) -> &Map<String, Value> {
    match obj.get(ENVELOPE_KEY).and_then(Value::as_object) {
        Some(inner) => inner,
        None => obj,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrowed view over one JSON object within a snapshot.
///
/// Every `*_or` accessor substitutes the caller's default when the key is
/// missing or holds an unexpected type -- absence of optional data is
/// normal in this feed, not an error.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a>(&'a Map<String, Value>);

impl<'a> Section<'a> {
    /// Raw value lookup, for the rare caller that needs the `Value` itself.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key)
    }

    /// Nested object under `key`, if present and actually an object.
    pub fn child(&self, key: &str) -> Option<Section<'a>> {
        self.0.get(key).and_then(Value::as_object).map(Section)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_owned()
    }

    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.0.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    /// Float accessor; also accepts integer-shaped numbers.
    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// List accessor; missing or non-array keys yield an empty slice.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map_or(EMPTY, Vec::as_slice)
    }

    /// Iterate the entries of this object in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn section_unwraps_status_envelope() {
        let snap = Snapshot::from_value(json!({
            "dish": { "status": { "reachable": true } }
        }))
        .expect("object root");

        let dish = snap.section("dish").expect("dish section");
        assert!(dish.bool_or("reachable", false));
    }

    #[test]
    fn section_accepts_bare_shape() {
        let snap = Snapshot::from_value(json!({
            "dish": { "reachable": true }
        }))
        .expect("object root");

        let dish = snap.section("dish").expect("dish section");
        assert!(dish.bool_or("reachable", false));
    }

    #[test]
    fn missing_section_is_none() {
        let snap = Snapshot::from_value(json!({ "router": {} })).expect("object root");
        assert!(snap.section("dish").is_none());
        assert!(!snap.has_section("dish"));
        assert!(snap.has_section("router"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = Snapshot::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::NotAnObject { found: "array" }
        ));
    }

    #[test]
    fn accessors_substitute_defaults_on_missing_or_mistyped_keys() {
        let snap = Snapshot::from_value(json!({
            "dish": {
                "id": "ut0123",
                "bootcount": "not-a-number",
                "uptimeS": 17
            }
        }))
        .expect("object root");
        let dish = snap.section("dish").expect("dish section");

        assert_eq!(dish.str_or("id", "Unknown"), "ut0123");
        assert_eq!(dish.str_or("absent", "Unknown"), "Unknown");
        assert_eq!(dish.i64_or("bootcount", 0), 0);
        assert_eq!(dish.i64_or("uptimeS", 0), 17);
        assert!((dish.f64_or("uptimeS", 0.0) - 17.0).abs() < f64::EPSILON);
        assert!(!dish.bool_or("absent", false));
        assert!(dish.list("absent").is_empty());
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(matches!(
            Snapshot::parse("{not json"),
            Err(SnapshotError::Parse(_))
        ));
    }
}
