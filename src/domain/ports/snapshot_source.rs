//! SnapshotSource port - abstraction for loading API snapshots
//!
//! The check use case depends on this trait rather than on a file format,
//! so tests can hand it snapshots built in memory.

use std::path::Path;

use crate::domain::entities::Snapshot;
use crate::error::WardenResult;

/// Loads a validated snapshot from a location
pub trait SnapshotSource {
    fn load_snapshot(&self, path: &Path) -> WardenResult<Snapshot>;
}
