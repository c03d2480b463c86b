use thiserror::Error;

/// Failures while loading the raw snapshot document.
///
/// Missing *optional* keys are never an error at this layer -- the accessors
/// on [`crate::Snapshot`] substitute defaults instead. This type only covers
/// getting a document into memory in the first place.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The input was not valid JSON.
    #[error("snapshot is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top level of the document was not a JSON object.
    #[error("snapshot root must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}
