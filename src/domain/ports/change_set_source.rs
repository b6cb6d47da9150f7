//! ChangeSetSource port - abstraction for loading caller annotations

use std::path::Path;

use crate::domain::entities::ChangeSet;
use crate::error::WardenResult;

/// Loads rename, bug-fix and exception annotations for one snapshot pair
pub trait ChangeSetSource {
    fn load_change_set(&self, path: &Path) -> WardenResult<ChangeSet>;
}
