//! Policy Report
//!
//! The serialized result of one check run. Reports carry no timestamps or
//! host details, so identical inputs always render identically.

use serde::Serialize;

use crate::domain::entities::{ChangeRecord, Snapshot};
use crate::domain::services::{EvaluatedChange, Evaluation};
use crate::domain::value_objects::{ReleaseVersion, RuleId, VerdictKind, WindowStatus};
use crate::error::WardenError;

/// Every change was Allowed or Warn
pub const EXIT_OK: i32 = 0;
/// At least one change was Disallowed
pub const EXIT_VIOLATION: i32 = 1;
/// The run could not be evaluated
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// One classified change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub change: ChangeRecord,
    pub verdict: VerdictKind,
    pub rule_id: RuleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowStatus>,
}

impl From<EvaluatedChange> for ReportEntry {
    fn from(evaluated: EvaluatedChange) -> Self {
        Self {
            verdict: evaluated.verdict.kind(),
            window: evaluated.window,
            rule_id: evaluated.rule,
            change: evaluated.change,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub allowed: usize,
    pub warned: usize,
    pub disallowed: usize,
    /// Changes dropped by the exclusion policy
    pub excluded: usize,
}

/// Configuration error collected during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl From<&WardenError> for ReportError {
    fn from(err: &WardenError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Identity of the inputs a report was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotInfo {
    pub version: ReleaseVersion,
    pub symbols: usize,
    pub fingerprint: String,
}

impl From<&Snapshot> for SnapshotInfo {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            version: snapshot.version().clone(),
            symbols: snapshot.len(),
            fingerprint: snapshot.fingerprint().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<SnapshotInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<SnapshotInfo>,
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
    pub errors: Vec<ReportError>,
}

impl PolicyReport {
    /// Report for a run that produced verdicts
    pub fn from_evaluation(old: &Snapshot, new: &Snapshot, evaluation: Evaluation) -> Self {
        let mut summary = ReportSummary {
            excluded: evaluation.excluded,
            ..ReportSummary::default()
        };

        let entries: Vec<ReportEntry> = evaluation
            .entries
            .into_iter()
            .map(ReportEntry::from)
            .inspect(|entry| match entry.verdict {
                VerdictKind::Allowed => summary.allowed += 1,
                VerdictKind::Warn => summary.warned += 1,
                VerdictKind::Disallowed => summary.disallowed += 1,
            })
            .collect();

        Self {
            old: Some(SnapshotInfo::from(old)),
            new: Some(SnapshotInfo::from(new)),
            entries,
            summary,
            errors: Vec::new(),
        }
    }

    /// Report for a run that stopped on configuration errors
    pub fn from_errors<'a>(errors: impl IntoIterator<Item = &'a WardenError>) -> Self {
        Self {
            errors: errors.into_iter().map(ReportError::from).collect(),
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if any change was Disallowed
    pub fn has_violations(&self) -> bool {
        self.summary.disallowed > 0
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            EXIT_CONFIG_ERROR
        } else if self.has_violations() {
            EXIT_VIOLATION
        } else {
            EXIT_OK
        }
    }
}
