//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Snapshot (JSON/YAML) and change set (TOML) loaders

pub mod repositories;

pub use repositories::{FileSnapshotSource, SnapshotFormat, TomlChangeSetSource};
