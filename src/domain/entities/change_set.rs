//! ChangeSet entity - caller-supplied annotations for one snapshot pair
//!
//! Holds the facts the differ is not allowed to guess: explicit renames,
//! behavior changes that are bug fixes, and human-granted severe-bug
//! exceptions.

use serde::{Deserialize, Serialize};

use super::ChangeAnnotations;
use crate::domain::value_objects::SymbolPath;

/// Explicit identity mapping from the old snapshot to the new one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rename {
    pub from: SymbolPath,
    pub to: SymbolPath,
}

/// A behavior change declared to be a bug fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugFix {
    pub path: SymbolPath,
}

/// Case-by-case exception for a severe bug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exception {
    pub path: SymbolPath,
    pub reason: String,
}

/// Annotations attached to a diff by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeSet {
    #[serde(default, rename = "rename")]
    pub renames: Vec<Rename>,
    #[serde(default, rename = "bug_fix")]
    pub bug_fixes: Vec<BugFix>,
    #[serde(default, rename = "exception")]
    pub exceptions: Vec<Exception>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rename(mut self, from: SymbolPath, to: SymbolPath) -> Self {
        self.renames.push(Rename { from, to });
        self
    }

    pub fn with_bug_fix(mut self, path: SymbolPath) -> Self {
        self.bug_fixes.push(BugFix { path });
        self
    }

    pub fn with_exception(mut self, path: SymbolPath, reason: impl Into<String>) -> Self {
        self.exceptions.push(Exception {
            path,
            reason: reason.into(),
        });
        self
    }

    /// Annotations for a change touching any of `paths`
    pub fn annotations_for<'a>(
        &self,
        paths: impl IntoIterator<Item = &'a SymbolPath> + Clone,
    ) -> ChangeAnnotations {
        let touches = |candidate: &SymbolPath| paths.clone().into_iter().any(|p| p == candidate);

        ChangeAnnotations {
            bug_fix: self.bug_fixes.iter().any(|b| touches(&b.path)),
            exception: self
                .exceptions
                .iter()
                .find(|e| touches(&e.path))
                .map(|e| e.reason.clone()),
        }
    }
}
