//! apiwarden - deprecation policy compliance checker
//!
//! apiwarden compares the public API surface of two releases, classifies
//! every detected change against an ordered rule catalog, and enforces a
//! minimum deprecation window before deprecated symbols may be removed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CheckRequest, CheckUseCase, PolicyReport};
pub use config::Config;
pub use domain::entities::{ApiSymbol, ChangeKind, ChangeRecord, ChangeSet, Snapshot};
pub use domain::services::{DeprecationWindowTracker, PolicyEngine, SnapshotDiffer};
pub use domain::value_objects::{ReleaseVersion, RuleId, SymbolKind, SymbolPath, Verdict};
pub use error::{WardenError, WardenResult};
pub use infrastructure::{FileSnapshotSource, TomlChangeSetSource};
