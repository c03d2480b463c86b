//! Raw telemetry snapshot access for the skyprobe workspace.
//!
//! The vendor debug feed is a loosely-structured JSON document: one top-level
//! section per device (`dish`, `router`, `device`), each optionally wrapped
//! one level deeper under a `status` envelope. Nothing in it can be trusted
//! to be present or well-shaped, so this crate exposes a [`Snapshot`] wrapper
//! whose accessors are uniformly best-effort: a missing or mis-typed key
//! yields the caller's default, never an error.
//!
//! The envelope unwrap happens exactly once, inside [`Snapshot::section`] --
//! downstream decoders never re-check it.

pub mod error;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{Section, Snapshot};
