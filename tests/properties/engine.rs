//! Property tests for diffing and classification.

use std::collections::BTreeMap;

use proptest::prelude::*;

use apiwarden::{
    ApiSymbol, ChangeKind, ChangeSet, PolicyEngine, ReleaseVersion, RuleId, Snapshot,
    SnapshotDiffer, SymbolKind, SymbolPath, Verdict,
};

fn kind() -> impl Strategy<Value = SymbolKind> {
    prop_oneof![
        Just(SymbolKind::Module),
        Just(SymbolKind::Method),
        Just(SymbolKind::Option),
        Just(SymbolKind::Parameter),
    ]
}

fn path() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["pants/goal", "pants/engine", "pants/engine/exp", "contrib/node"]),
        prop::option::of(prop::sample::select(vec!["run", "run.verbose", "fail_fast", "colors", "level"])),
    )
        .prop_map(|(module, member)| match member {
            Some(member) => format!("{module}::{member}"),
            None => module.to_string(),
        })
}

#[derive(Debug, Clone)]
struct Shape {
    kind: SymbolKind,
    public: bool,
    params: Vec<&'static str>,
    tag: Option<&'static str>,
    /// Minor of a 1.x deprecation, valid for both snapshots of `pair()`
    deprecated: Option<u64>,
}

fn shape() -> impl Strategy<Value = Shape> {
    (
        kind(),
        prop::bool::weighted(0.9),
        prop::sample::subsequence(vec!["a", "b", "c"], 0..=3),
        prop::option::of(prop::sample::select(vec!["v1", "v2"])),
        prop::option::weighted(0.3, 0u64..=4),
    )
        .prop_map(|(kind, public, params, tag, deprecated)| Shape {
            kind,
            public,
            params,
            tag,
            deprecated,
        })
}

fn build(path: &str, shape: &Shape) -> ApiSymbol {
    let mut symbol = ApiSymbol::new(SymbolPath::new(path).unwrap(), shape.kind).with_public(shape.public);
    if shape.kind == SymbolKind::Method {
        symbol = symbol.with_params(shape.params.iter().copied());
    }
    if let Some(tag) = shape.tag {
        symbol = symbol.with_behavior_tag(tag);
    }
    if let Some(minor) = shape.deprecated {
        symbol = symbol.with_deprecated_since(ReleaseVersion::new(1, minor, 0));
    }
    symbol
}

fn snapshot(version: ReleaseVersion) -> impl Strategy<Value = Snapshot> {
    prop::collection::btree_map(path(), shape(), 0..12).prop_map(move |symbols: BTreeMap<_, _>| {
        let symbols = symbols.iter().map(|(path, shape)| build(path, shape)).collect();
        Snapshot::new(version.clone(), symbols).unwrap()
    })
}

fn pair() -> impl Strategy<Value = (Snapshot, Snapshot)> {
    (snapshot(ReleaseVersion::new(1, 4, 0)), snapshot(ReleaseVersion::new(1, 5, 0)))
}

/// Valid rename annotations: vanished symbols paired with same-kind newcomers,
/// each candidate kept or dropped by `mask`
fn renames_between(old: &Snapshot, new: &Snapshot, mask: &[bool]) -> ChangeSet {
    let mut targets: Vec<&ApiSymbol> = new
        .symbols()
        .filter(|s| !old.contains(s.path.as_str()))
        .collect();
    let mut changes = ChangeSet::new();
    let mut picks = mask.iter().copied().cycle();

    for source in old.symbols().filter(|s| !new.contains(s.path.as_str())) {
        let Some(index) = targets.iter().position(|t| t.kind == source.kind) else {
            continue;
        };
        if picks.next().unwrap_or(false) {
            let target = targets.remove(index);
            changes = changes.with_rename(source.path.clone(), target.path.clone());
        }
    }
    changes
}

fn annotated_pair() -> impl Strategy<Value = (Snapshot, Snapshot, ChangeSet)> {
    (pair(), prop::collection::vec(any::<bool>(), 1..8)).prop_map(|((old, new), mask)| {
        let changes = renames_between(&old, &new, &mask);
        (old, new, changes)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every detected change is either excluded or gets exactly one verdict.
    #[test]
    fn property_classification_is_total((old, new, renames) in annotated_pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &renames).unwrap();
        let total = changes.len();

        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        prop_assert_eq!(evaluation.entries.len() + evaluation.excluded, total);
    }

    /// PROPERTY: additions never produce a Disallowed verdict.
    #[test]
    fn property_additions_are_never_disallowed((old, new) in pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &ChangeSet::default()).unwrap();
        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        for entry in &evaluation.entries {
            if matches!(entry.change.kind, ChangeKind::Added | ChangeKind::ParamAdded) {
                prop_assert_eq!(&entry.verdict, &Verdict::Allowed);
            }
        }
    }

    /// PROPERTY: dropping a parameter of an in-scope method is always rejected.
    #[test]
    fn property_param_removal_is_disallowed((old, new) in pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &ChangeSet::default()).unwrap();
        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        for entry in &evaluation.entries {
            if entry.change.kind == ChangeKind::ParamRemoved {
                prop_assert_eq!(&entry.verdict, &Verdict::Disallowed);
                prop_assert_eq!(entry.rule, RuleId::ParamRemoval);
            }
        }
    }

    /// PROPERTY: excluded and non-public symbols never reach a verdict.
    #[test]
    fn property_excluded_symbols_are_never_reported((old, new) in pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &ChangeSet::default()).unwrap();
        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        for entry in &evaluation.entries {
            for side in entry.change.sides() {
                prop_assert!(side.public);
                prop_assert!(!side.path.module_path().split('/').any(|segment| segment == "exp"));
            }
        }
    }

    /// PROPERTY: evaluation is deterministic for identical inputs.
    #[test]
    fn property_evaluation_is_idempotent((old, new, renames) in annotated_pair()) {
        let differ = SnapshotDiffer::new();
        let engine = PolicyEngine::default();

        let first = engine.evaluate(differ.diff(&old, &new, &renames).unwrap(), new.version());
        let second = engine.evaluate(differ.diff(&old, &new, &renames).unwrap(), new.version());

        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a deprecated symbol that loses its identity is judged by its window.
    #[test]
    fn property_deprecated_identity_loss_uses_window((old, new, renames) in annotated_pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &renames).unwrap();
        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        for entry in &evaluation.entries {
            let deprecated = entry.change.old.as_ref().is_some_and(|s| s.is_deprecated());
            if deprecated && entry.change.kind.drops_identity() {
                prop_assert!(
                    matches!(entry.rule, RuleId::DeprecatedRemoval | RuleId::WindowViolation),
                    "{} {} got {}",
                    entry.change.path,
                    entry.change.kind,
                    entry.rule
                );
            }
        }
    }

    /// PROPERTY: window-decided verdicts carry a window that agrees with them.
    #[test]
    fn property_window_verdicts_carry_status((old, new, renames) in annotated_pair()) {
        let changes = SnapshotDiffer::new().diff(&old, &new, &renames).unwrap();
        let evaluation = PolicyEngine::default().evaluate(changes, new.version());

        for entry in &evaluation.entries {
            match entry.rule {
                RuleId::WindowViolation => {
                    prop_assert_eq!(&entry.verdict, &Verdict::Disallowed);
                    let window = entry.window.as_ref();
                    prop_assert!(window.is_some_and(|w| w.still_required));
                }
                RuleId::DeprecatedRemoval => {
                    prop_assert_eq!(&entry.verdict, &Verdict::Allowed);
                    let window = entry.window.as_ref();
                    prop_assert!(window.is_some_and(|w| !w.still_required));
                }
                _ => {}
            }
        }
    }

    /// PROPERTY: a snapshot compared with itself has no changes.
    #[test]
    fn property_self_diff_is_empty(snapshot in snapshot(ReleaseVersion::new(2, 0, 0))) {
        let changes = SnapshotDiffer::new().diff(&snapshot, &snapshot, &ChangeSet::default()).unwrap();
        prop_assert!(changes.is_empty());
    }
}
