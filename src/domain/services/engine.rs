//! Policy Engine Domain Service
//!
//! Classifies change records against an ordered rule set. Excluded changes
//! are dropped entirely; every other change receives exactly one verdict.

use crate::domain::entities::ChangeRecord;
use crate::domain::policies::{rule_effect, ExclusionPolicy, RuleEffect, RuleSet};
use crate::domain::services::DeprecationWindowTracker;
use crate::domain::value_objects::{ReleaseVersion, RuleId, Verdict, WindowStatus};

/// A change together with its verdict and the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedChange {
    pub change: ChangeRecord,
    pub verdict: Verdict,
    pub rule: RuleId,
    /// Set whenever the deprecation window decided the verdict
    pub window: Option<WindowStatus>,
}

/// Outcome of classifying one change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub rule: RuleId,
    pub window: Option<WindowStatus>,
}

impl Classification {
    fn of(verdict: Verdict, rule: RuleId) -> Self {
        Self {
            verdict,
            rule,
            window: None,
        }
    }
}

/// Output of one engine pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Verdicts in input order
    pub entries: Vec<EvaluatedChange>,
    /// Number of changes skipped by the exclusion policy
    pub excluded: usize,
}

/// Policy engine: rules, scope and deprecation window
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    rules: RuleSet,
    exclusion: ExclusionPolicy,
    tracker: DeprecationWindowTracker,
}

impl PolicyEngine {
    pub fn new(rules: RuleSet, exclusion: ExclusionPolicy, tracker: DeprecationWindowTracker) -> Self {
        Self {
            rules,
            exclusion,
            tracker,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn tracker(&self) -> &DeprecationWindowTracker {
        &self.tracker
    }

    /// Evaluate `changes` as of release `current` (the new snapshot's version).
    pub fn evaluate(&self, changes: Vec<ChangeRecord>, current: &ReleaseVersion) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for change in changes {
            if self.exclusion.excludes_change(&change) {
                tracing::debug!(path = %change.path, "change outside policy scope");
                evaluation.excluded += 1;
                continue;
            }

            let Classification {
                verdict,
                rule,
                window,
            } = self.classify(&change, current);
            tracing::debug!(
                path = %change.path,
                kind = %change.kind,
                rule = %rule,
                verdict = %verdict.kind(),
                "change classified"
            );

            evaluation.entries.push(EvaluatedChange {
                change,
                verdict,
                rule,
                window,
            });
        }

        evaluation
    }

    /// Verdict for a single in-scope change
    pub fn classify(&self, change: &ChangeRecord, current: &ReleaseVersion) -> Classification {
        if change.annotations.exception.is_some() {
            return Classification::of(Verdict::Allowed, RuleId::SevereBugException);
        }

        let Some(rule) = self.rules.first_match(change) else {
            return Classification::of(Verdict::Disallowed, RuleId::Unclassified);
        };

        match rule_effect(rule) {
            RuleEffect::Allow => Classification::of(Verdict::Allowed, rule),
            RuleEffect::Disallow => Classification::of(Verdict::Disallowed, rule),
            RuleEffect::Warn => self.apply_window(rule, change, current),
        }
    }

    fn apply_window(
        &self,
        rule: RuleId,
        change: &ChangeRecord,
        current: &ReleaseVersion,
    ) -> Classification {
        // Removals are judged by the old marker, fresh deprecations by the new one.
        let side = if rule == RuleId::DeprecatedRemoval {
            change.old.as_ref()
        } else {
            change.new.as_ref()
        };
        let Some(since) = side.and_then(|s| s.deprecated_since.as_ref()) else {
            return Classification::of(Verdict::Disallowed, RuleId::Unclassified);
        };

        let status = self.tracker.status(since, current);

        if rule == RuleId::DeprecatedRemoval {
            if status.still_required {
                tracing::debug!(
                    path = %change.path,
                    earliest_removal = %status.earliest_removal,
                    "deprecated symbol removed inside its window"
                );
                return Classification {
                    verdict: Verdict::Disallowed,
                    rule: RuleId::WindowViolation,
                    window: Some(status),
                };
            }
            return Classification {
                verdict: Verdict::Allowed,
                rule,
                window: Some(status),
            };
        }

        Classification {
            verdict: Verdict::Warn(status.clone()),
            rule,
            window: Some(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApiSymbol, ChangeKind, ChangeSet, Snapshot};
    use crate::domain::services::SnapshotDiffer;
    use crate::domain::value_objects::{SymbolKind, SymbolPath, VerdictKind};

    fn v(raw: &str) -> ReleaseVersion {
        ReleaseVersion::parse(raw).unwrap()
    }

    fn symbol(path: &str, kind: SymbolKind) -> ApiSymbol {
        ApiSymbol::new(SymbolPath::new(path).unwrap(), kind)
    }

    fn run(old: Vec<ApiSymbol>, old_v: &str, new: Vec<ApiSymbol>, new_v: &str) -> Evaluation {
        run_with(old, old_v, new, new_v, &ChangeSet::default())
    }

    fn run_with(
        old: Vec<ApiSymbol>,
        old_v: &str,
        new: Vec<ApiSymbol>,
        new_v: &str,
        changes: &ChangeSet,
    ) -> Evaluation {
        let old = Snapshot::new(v(old_v), old).unwrap();
        let new = Snapshot::new(v(new_v), new).unwrap();
        let records = SnapshotDiffer::new().diff(&old, &new, changes).unwrap();
        PolicyEngine::default().evaluate(records, new.version())
    }

    #[test]
    fn param_added_is_allowed() {
        let eval = run(
            vec![symbol("a::M", SymbolKind::Method).with_params(["a"])],
            "1.0",
            vec![symbol("a::M", SymbolKind::Method).with_params(["a", "b"])],
            "1.1",
        );
        assert_eq!(eval.entries.len(), 1);
        assert_eq!(eval.entries[0].change.kind, ChangeKind::ParamAdded);
        assert_eq!(eval.entries[0].verdict, Verdict::Allowed);
        assert_eq!(eval.entries[0].rule, RuleId::Addition);
    }

    #[test]
    fn option_removal_is_disallowed() {
        let eval = run(vec![symbol("a::O", SymbolKind::Option)], "1.0", vec![], "1.1");
        assert_eq!(eval.entries[0].verdict, Verdict::Disallowed);
        assert_eq!(eval.entries[0].rule, RuleId::OptionRemoval);
    }

    #[test]
    fn experimental_removal_is_invisible() {
        let eval = run(
            vec![symbol("pants/exp/engine::O", SymbolKind::Option)],
            "1.0",
            vec![],
            "1.1",
        );
        assert!(eval.entries.is_empty());
        assert_eq!(eval.excluded, 1);
    }

    #[test]
    fn removal_inside_window_is_violation() {
        let deprecated = symbol("a::O", SymbolKind::Option).with_deprecated_since(v("1.0"));
        let eval = run(vec![deprecated], "1.1", vec![], "1.2");
        assert_eq!(eval.entries[0].verdict, Verdict::Disallowed);
        assert_eq!(eval.entries[0].rule, RuleId::WindowViolation);

        let window = eval.entries[0].window.as_ref().unwrap();
        assert!(window.still_required);
        assert_eq!(window.deprecated_since, v("1.0"));
        assert_eq!(window.earliest_removal, v("1.3.0"));
    }

    #[test]
    fn removal_after_window_is_allowed() {
        let deprecated = symbol("a::O", SymbolKind::Option).with_deprecated_since(v("1.0"));
        let eval = run(vec![deprecated], "1.2", vec![], "1.3");
        assert_eq!(eval.entries[0].verdict, Verdict::Allowed);
        assert_eq!(eval.entries[0].rule, RuleId::DeprecatedRemoval);
        assert!(!eval.entries[0].window.as_ref().unwrap().still_required);
    }

    #[test]
    fn rename_of_expired_deprecation_is_allowed() {
        let changes = ChangeSet::new().with_rename(
            SymbolPath::new("a::fail_fast").unwrap(),
            SymbolPath::new("a::fail_faster").unwrap(),
        );
        let eval = run_with(
            vec![symbol("a::fail_fast", SymbolKind::Option).with_deprecated_since(v("1.0"))],
            "1.5",
            vec![symbol("a::fail_faster", SymbolKind::Option)],
            "1.6",
            &changes,
        );
        assert_eq!(eval.entries.len(), 1);
        assert_eq!(eval.entries[0].change.kind, ChangeKind::Renamed);
        assert_eq!(eval.entries[0].verdict, Verdict::Allowed);
        assert_eq!(eval.entries[0].rule, RuleId::DeprecatedRemoval);
    }

    #[test]
    fn rename_inside_window_is_violation() {
        let changes = ChangeSet::new().with_rename(
            SymbolPath::new("a::fail_fast").unwrap(),
            SymbolPath::new("a::fail_faster").unwrap(),
        );
        let eval = run_with(
            vec![symbol("a::fail_fast", SymbolKind::Option).with_deprecated_since(v("1.5"))],
            "1.5",
            vec![symbol("a::fail_faster", SymbolKind::Option)],
            "1.6",
            &changes,
        );
        assert_eq!(eval.entries[0].verdict, Verdict::Disallowed);
        assert_eq!(eval.entries[0].rule, RuleId::WindowViolation);
        assert_eq!(
            eval.entries[0].window.as_ref().unwrap().earliest_removal,
            v("1.8.0")
        );
    }

    #[test]
    fn fresh_deprecation_warns_with_window() {
        let eval = run(
            vec![symbol("a::O", SymbolKind::Option)],
            "1.0",
            vec![symbol("a::O", SymbolKind::Option).with_deprecated_since(v("1.1"))],
            "1.1",
        );
        let entry = &eval.entries[0];
        assert_eq!(entry.rule, RuleId::Deprecation);
        assert_eq!(entry.verdict.kind(), VerdictKind::Warn);
        let window = entry.verdict.window().unwrap();
        assert!(window.still_required);
        assert_eq!(window.earliest_removal, v("1.4.0"));
        assert_eq!(entry.window.as_ref(), Some(window));
    }

    #[test]
    fn unmatched_change_fails_closed() {
        let eval = run(vec![symbol("a::run", SymbolKind::Method)], "1.0", vec![], "1.1");
        assert_eq!(eval.entries[0].verdict, Verdict::Disallowed);
        assert_eq!(eval.entries[0].rule, RuleId::Unclassified);
    }

    #[test]
    fn severe_bug_exception_overrides_rules() {
        let changes = ChangeSet::new()
            .with_exception(SymbolPath::new("a::O").unwrap(), "CVE fix");
        let eval = run_with(
            vec![symbol("a::O", SymbolKind::Option)],
            "1.0",
            vec![],
            "1.1",
            &changes,
        );
        assert_eq!(eval.entries[0].verdict, Verdict::Allowed);
        assert_eq!(eval.entries[0].rule, RuleId::SevereBugException);
    }

    #[test]
    fn exclusion_wins_over_exception() {
        let changes = ChangeSet::new()
            .with_exception(SymbolPath::new("a/exp::O").unwrap(), "CVE fix");
        let eval = run_with(
            vec![symbol("a/exp::O", SymbolKind::Option)],
            "1.0",
            vec![],
            "1.1",
            &changes,
        );
        assert!(eval.entries.is_empty());
    }

    #[test]
    fn becoming_non_public_is_out_of_scope() {
        let eval = run(
            vec![symbol("a::run", SymbolKind::Method).with_behavior_tag("v1")],
            "1.0",
            vec![symbol("a::run", SymbolKind::Method)
                .with_behavior_tag("v2")
                .with_public(false)],
            "1.1",
        );
        assert!(eval.entries.is_empty());
        assert_eq!(eval.excluded, 1);
    }
}
