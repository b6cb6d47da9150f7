//! Snapshot Differ Domain Service
//!
//! Computes the ordered list of `ChangeRecord`s between two snapshots.
//! Renames are never guessed: only pairs listed in the caller's `ChangeSet`
//! are treated as the same symbol.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{ApiSymbol, ChangeKind, ChangeRecord, ChangeSet, Snapshot};
use crate::domain::value_objects::SymbolPath;
use crate::error::{WardenError, WardenResult};

/// Parameter-level difference between two versions of one symbol
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    /// Retained parameters appear in a different relative order
    pub reordered: bool,
}

impl ParamDiff {
    pub fn between(old: &[String], new: &[String]) -> Self {
        let added: Vec<String> = new.iter().filter(|p| !old.contains(p)).cloned().collect();
        let removed: Vec<String> = old.iter().filter(|p| !new.contains(p)).cloned().collect();

        let old_retained: Vec<&String> = old.iter().filter(|p| new.contains(p)).collect();
        let new_retained: Vec<&String> = new.iter().filter(|p| old.contains(p)).collect();

        Self {
            added,
            removed,
            reordered: old_retained != new_retained,
        }
    }

    /// Existing callers may break
    pub fn breaks_callers(&self) -> bool {
        !self.removed.is_empty() || self.reordered
    }
}

/// Differ service for snapshot pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotDiffer;

impl SnapshotDiffer {
    pub fn new() -> Self {
        Self
    }

    /// Diff `old` against `new`, honoring the renames in `changes`.
    ///
    /// Records are ordered by identity path. Symbols identical on both sides
    /// produce no record.
    pub fn diff(
        &self,
        old: &Snapshot,
        new: &Snapshot,
        changes: &ChangeSet,
    ) -> WardenResult<Vec<ChangeRecord>> {
        let renames = validate_renames(old, new, changes)?;
        let rename_targets: BTreeSet<&SymbolPath> = renames.values().copied().collect();

        let mut records = Vec::new();

        for old_symbol in old.symbols() {
            let record = if let Some(target) = renames.get(&old_symbol.path) {
                new.get(target.as_str())
                    .map(|new_symbol| identity_change(old_symbol, new_symbol))
            } else {
                match new.get(old_symbol.path.as_str()) {
                    Some(new_symbol) => compare(old_symbol, new_symbol),
                    None => Some(ChangeRecord::removed(old_symbol.clone())),
                }
            };

            if let Some(record) = record {
                records.push(record);
            }
        }

        for new_symbol in new.symbols() {
            if !old.contains(new_symbol.path.as_str()) && !rename_targets.contains(&new_symbol.path)
            {
                records.push(ChangeRecord::added(new_symbol.clone()));
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));

        for record in &mut records {
            record.annotations = changes.annotations_for(record.sides().map(|s| &s.path));
            tracing::debug!(path = %record.path, kind = %record.kind, "change detected");
        }

        validate_annotations(&records, changes)?;

        Ok(records)
    }
}

/// Every bug-fix and exception entry must name a side of some record
fn validate_annotations(records: &[ChangeRecord], changes: &ChangeSet) -> WardenResult<()> {
    let touched: BTreeSet<&SymbolPath> = records
        .iter()
        .flat_map(|r| r.sides().map(|s| &s.path))
        .collect();

    let annotated = changes
        .bug_fixes
        .iter()
        .map(|b| ("bug_fix", &b.path))
        .chain(changes.exceptions.iter().map(|e| ("exception", &e.path)));

    for (section, path) in annotated {
        if !touched.contains(path) {
            return Err(WardenError::UnmatchedAnnotation {
                section: section.to_string(),
                path: path.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_renames<'a>(
    old: &Snapshot,
    new: &Snapshot,
    changes: &'a ChangeSet,
) -> WardenResult<BTreeMap<&'a SymbolPath, &'a SymbolPath>> {
    let mut map = BTreeMap::new();
    let mut targets = BTreeSet::new();

    for rename in &changes.renames {
        let invalid = |reason: &str| WardenError::InvalidRename {
            from: rename.from.to_string(),
            to: rename.to.to_string(),
            reason: reason.to_string(),
        };

        let Some(source) = old.get(rename.from.as_str()) else {
            return Err(invalid("source is not in the old snapshot"));
        };
        if new.contains(rename.from.as_str()) {
            return Err(invalid("source still exists in the new snapshot"));
        }
        let Some(target) = new.get(rename.to.as_str()) else {
            return Err(invalid("target is not in the new snapshot"));
        };
        if old.contains(rename.to.as_str()) {
            return Err(invalid("target already exists in the old snapshot"));
        }
        if source.kind != target.kind {
            return Err(invalid("source and target have different kinds"));
        }
        if !targets.insert(&rename.to) || map.insert(&rename.from, &rename.to).is_some() {
            return Err(invalid("symbol appears in more than one rename"));
        }
    }

    Ok(map)
}

/// Caller-mapped pair: moved when only the containing module changed
fn identity_change(old: &ApiSymbol, new: &ApiSymbol) -> ChangeRecord {
    let kind = if old.path.member_name() == new.path.member_name() {
        ChangeKind::Moved
    } else {
        ChangeKind::Renamed
    };

    let params = ParamDiff::between(&old.params, &new.params);
    let mut record = ChangeRecord::modified(kind, old.clone(), new.clone());
    record.params_added = params.added;
    record.params_removed = params.removed;
    record
}

/// Same identity on both sides; `None` when nothing detectable changed
fn compare(old: &ApiSymbol, new: &ApiSymbol) -> Option<ChangeRecord> {
    // A symbol that changes kind no longer exists as what callers used.
    if old.kind != new.kind {
        return Some(ChangeRecord::modified(
            ChangeKind::Removed,
            old.clone(),
            new.clone(),
        ));
    }

    let params = ParamDiff::between(&old.params, &new.params);

    let kind = if params.breaks_callers() {
        ChangeKind::ParamRemoved
    } else if old.behavior_tag != new.behavior_tag {
        ChangeKind::BehaviorChanged
    } else if !params.added.is_empty() {
        ChangeKind::ParamAdded
    } else if !old.is_deprecated() && new.is_deprecated() {
        ChangeKind::Deprecated
    } else {
        return None;
    };

    let mut record = ChangeRecord::modified(kind, old.clone(), new.clone());
    record.params_added = params.added;
    record.params_removed = params.removed;
    Some(record)
}
