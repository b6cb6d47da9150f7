//! Domain Entities
//!
//! Core domain entities.
//! - `ApiSymbol` - One public API unit
//! - `Snapshot` - The API surface at one release
//! - `ChangeRecord` - One detected difference between two snapshots
//! - `ChangeSet` - Caller-supplied renames and annotations

mod change;
mod change_set;
mod snapshot;
mod symbol;

pub use change::{ChangeAnnotations, ChangeKind, ChangeRecord};
pub use change_set::{BugFix, ChangeSet, Exception, Rename};
pub use snapshot::{Snapshot, SnapshotDocument};
pub use symbol::ApiSymbol;
