//! ChangeRecord entity - one detected difference between two snapshots

use serde::Serialize;

use super::ApiSymbol;
use crate::domain::value_objects::{SymbolKind, SymbolPath};

/// What happened to a symbol between the old and new snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    Added,
    Removed,
    /// Caller-mapped identity change with a new member name
    Renamed,
    ParamAdded,
    ParamRemoved,
    /// Behavior tag changed
    BehaviorChanged,
    /// Caller-mapped identity change keeping the member name
    Moved,
    /// Symbol gained a deprecation marker
    Deprecated,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Renamed => "renamed",
            ChangeKind::ParamAdded => "param-added",
            ChangeKind::ParamRemoved => "param-removed",
            ChangeKind::BehaviorChanged => "behavior-changed",
            ChangeKind::Moved => "moved",
            ChangeKind::Deprecated => "deprecated",
        }
    }

    /// Returns true for kinds where the old identity disappears
    pub fn drops_identity(&self) -> bool {
        matches!(
            self,
            ChangeKind::Removed | ChangeKind::Renamed | ChangeKind::Moved
        )
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-attached facts the differ cannot derive structurally
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAnnotations {
    /// The behavior change fixes a bug
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bug_fix: bool,
    /// Severe-bug exception granted by a human, with its reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

/// One detected change between two snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    /// Identity of the change: the old path, or the new path for additions
    pub path: SymbolPath,
    pub kind: ChangeKind,
    pub old: Option<ApiSymbol>,
    pub new: Option<ApiSymbol>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params_added: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params_removed: Vec<String>,
    #[serde(skip_serializing_if = "is_default_annotations")]
    pub annotations: ChangeAnnotations,
}

fn is_default_annotations(annotations: &ChangeAnnotations) -> bool {
    *annotations == ChangeAnnotations::default()
}

impl ChangeRecord {
    pub fn added(symbol: ApiSymbol) -> Self {
        Self::build(symbol.path.clone(), ChangeKind::Added, None, Some(symbol))
    }

    pub fn removed(symbol: ApiSymbol) -> Self {
        Self::build(symbol.path.clone(), ChangeKind::Removed, Some(symbol), None)
    }

    /// A change where the symbol exists on both sides
    pub fn modified(kind: ChangeKind, old: ApiSymbol, new: ApiSymbol) -> Self {
        Self::build(old.path.clone(), kind, Some(old), Some(new))
    }

    fn build(
        path: SymbolPath,
        kind: ChangeKind,
        old: Option<ApiSymbol>,
        new: Option<ApiSymbol>,
    ) -> Self {
        Self {
            path,
            kind,
            old,
            new,
            params_added: Vec::new(),
            params_removed: Vec::new(),
            annotations: ChangeAnnotations::default(),
        }
    }

    /// Kind of the symbol this change concerns (old side wins)
    pub fn symbol_kind(&self) -> SymbolKind {
        self.old
            .as_ref()
            .or(self.new.as_ref())
            .map(|s| s.kind)
            .unwrap_or(SymbolKind::Module)
    }

    /// Path on the new side, when it differs from the identity
    pub fn new_path(&self) -> Option<&SymbolPath> {
        self.new.as_ref().map(|s| &s.path).filter(|p| **p != self.path)
    }

    /// The symbol sides present on this change
    pub fn sides(&self) -> impl Iterator<Item = &ApiSymbol> + Clone {
        self.old.iter().chain(self.new.iter())
    }
}
