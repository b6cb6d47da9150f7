//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod change_set_source;
pub mod snapshot_source;

pub use change_set_source::ChangeSetSource;
pub use snapshot_source::SnapshotSource;
