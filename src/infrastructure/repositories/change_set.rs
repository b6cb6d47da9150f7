//! TOML Change Set Source
//!
//! Implements the ChangeSetSource port for `[[rename]]`, `[[bug_fix]]` and
//! `[[exception]]` annotation files.

use std::path::Path;

use crate::domain::entities::ChangeSet;
use crate::domain::ports::ChangeSetSource;
use crate::error::{WardenError, WardenResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlChangeSetSource;

impl TomlChangeSetSource {
    pub fn new() -> Self {
        Self
    }
}

impl ChangeSetSource for TomlChangeSetSource {
    fn load_change_set(&self, path: &Path) -> WardenResult<ChangeSet> {
        let content = std::fs::read_to_string(path).map_err(|e| WardenError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let changes: ChangeSet = toml::from_str(&content).map_err(|e| WardenError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            renames = changes.renames.len(),
            bug_fixes = changes.bug_fixes.len(),
            exceptions = changes.exceptions.len(),
            "change set loaded"
        );
        Ok(changes)
    }
}
