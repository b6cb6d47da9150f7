//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod engine;
mod rename_suggester;
mod window;

pub use differ::{ParamDiff, SnapshotDiffer};
pub use engine::{Classification, EvaluatedChange, Evaluation, PolicyEngine};
pub use rename_suggester::{RenameSuggester, RenameSuggestion, DEFAULT_THRESHOLD};
pub use window::{DeprecationWindowTracker, DEFAULT_WINDOW};
