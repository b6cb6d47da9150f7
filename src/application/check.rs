//! Check Use Case
//!
//! Orchestrates one policy run: load both snapshots and the optional change
//! set, diff, evaluate, and build a `PolicyReport`. Load and validation
//! failures are collected into the report instead of being returned.

use std::path::PathBuf;

use crate::domain::entities::{ChangeRecord, ChangeSet, Snapshot};
use crate::domain::ports::{ChangeSetSource, SnapshotSource};
use crate::domain::services::{PolicyEngine, RenameSuggester, RenameSuggestion, SnapshotDiffer};
use crate::error::{WardenError, WardenResult};

use super::report::PolicyReport;

/// Input locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRequest {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Optional change-set annotations
    pub changes: Option<PathBuf>,
}

impl CheckRequest {
    pub fn new(old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
            changes: None,
        }
    }

    pub fn with_changes(mut self, changes: impl Into<PathBuf>) -> Self {
        self.changes = Some(changes.into());
        self
    }
}

/// Loaded and validated inputs
#[derive(Debug, Clone)]
pub struct CheckInputs {
    pub old: Snapshot,
    pub new: Snapshot,
    pub changes: ChangeSet,
}

/// Check Use Case
pub struct CheckUseCase<S, C> {
    snapshots: S,
    change_sets: C,
    engine: PolicyEngine,
}

impl<S, C> CheckUseCase<S, C>
where
    S: SnapshotSource,
    C: ChangeSetSource,
{
    pub fn new(snapshots: S, change_sets: C, engine: PolicyEngine) -> Self {
        Self {
            snapshots,
            change_sets,
            engine,
        }
    }

    pub fn engine(&self) -> &PolicyEngine {
        &self.engine
    }

    /// Load every input, collecting all failures rather than the first
    pub fn load(&self, request: &CheckRequest) -> Result<CheckInputs, Vec<WardenError>> {
        let old = self.snapshots.load_snapshot(&request.old);
        let new = self.snapshots.load_snapshot(&request.new);
        let changes = self.load_changes(request);

        match (old, new, changes) {
            (Ok(old), Ok(new), Ok(changes)) => Ok(CheckInputs { old, new, changes }),
            (old, new, changes) => Err([old.err(), new.err(), changes.err()]
                .into_iter()
                .flatten()
                .collect()),
        }
    }

    fn load_changes(&self, request: &CheckRequest) -> WardenResult<ChangeSet> {
        match &request.changes {
            Some(path) => self.change_sets.load_change_set(path),
            None => Ok(ChangeSet::default()),
        }
    }

    /// Execute the full check; never fails, errors land in the report
    pub fn execute(&self, request: &CheckRequest) -> PolicyReport {
        match self.load(request) {
            Ok(inputs) => self.evaluate(&inputs),
            Err(errors) => {
                for err in &errors {
                    tracing::error!(code = err.code(), "{}", err);
                }
                PolicyReport::from_errors(&errors)
            }
        }
    }

    /// Diff and evaluate already-loaded inputs
    pub fn evaluate(&self, inputs: &CheckInputs) -> PolicyReport {
        let records = match SnapshotDiffer::new().diff(&inputs.old, &inputs.new, &inputs.changes) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(code = err.code(), "{}", err);
                return PolicyReport::from_errors([&err]);
            }
        };

        let evaluation = self.engine.evaluate(records, inputs.new.version());
        let report = PolicyReport::from_evaluation(&inputs.old, &inputs.new, evaluation);

        tracing::info!(
            old = %inputs.old.version(),
            new = %inputs.new.version(),
            allowed = report.summary.allowed,
            warned = report.summary.warned,
            disallowed = report.summary.disallowed,
            excluded = report.summary.excluded,
            "policy check complete"
        );
        report
    }

    /// Change records only, without verdicts
    pub fn diff(&self, request: &CheckRequest) -> WardenResult<Vec<ChangeRecord>> {
        let old = self.snapshots.load_snapshot(&request.old)?;
        let new = self.snapshots.load_snapshot(&request.new)?;
        let changes = self.load_changes(request)?;
        SnapshotDiffer::new().diff(&old, &new, &changes)
    }

    /// Advisory rename pairs among the unmapped removals and additions
    pub fn suggest_renames(
        &self,
        request: &CheckRequest,
        suggester: &RenameSuggester,
    ) -> WardenResult<Vec<RenameSuggestion>> {
        let records = self.diff(request)?;
        Ok(suggester.suggest(&records))
    }
}
