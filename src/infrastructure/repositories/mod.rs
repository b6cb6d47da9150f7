//! Repository Implementations
//!
//! Concrete implementations of the loading ports.

mod change_set;
mod snapshot;

pub use change_set::TomlChangeSetSource;
pub use snapshot::{FileSnapshotSource, SnapshotFormat};
