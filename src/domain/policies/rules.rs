//! Rule Catalog
//!
//! Each catalog rule is a pure predicate over a `ChangeRecord` paired with a
//! fixed effect. A `RuleSet` holds the configured priority order; the first
//! rule whose predicate matches decides.

use crate::domain::entities::{ChangeKind, ChangeRecord};
use crate::domain::value_objects::{RuleId, SymbolKind};
use crate::error::{WardenError, WardenResult};

/// Effect of a matching rule, before window tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEffect {
    Allow,
    Disallow,
    /// Allowed for now; the deprecation window decides the final verdict
    Warn,
}

/// Fixed effect of a catalog rule
pub fn rule_effect(rule: RuleId) -> RuleEffect {
    match rule {
        RuleId::Addition | RuleId::BugFix | RuleId::SevereBugException => RuleEffect::Allow,
        RuleId::DeprecatedRemoval | RuleId::Deprecation => RuleEffect::Warn,
        RuleId::ModuleRemoval
        | RuleId::OptionRemoval
        | RuleId::ParamRemoval
        | RuleId::BehaviorChange
        | RuleId::Unclassified
        | RuleId::WindowViolation => RuleEffect::Disallow,
    }
}

/// One-line description used by `apiwarden rules`
pub fn rule_description(rule: RuleId) -> &'static str {
    match rule {
        RuleId::Addition => "new module, method, option or parameter",
        RuleId::DeprecatedRemoval => {
            "removal, rename or move of a deprecated symbol, judged by its window"
        }
        RuleId::ModuleRemoval => "removal, rename or move of a public module",
        RuleId::OptionRemoval => "removal, rename or move of an option",
        RuleId::ParamRemoval => "removal or reordering of a public method's parameters",
        RuleId::BugFix => "behavior change declared as a bug fix",
        RuleId::BehaviorChange => "change to existing default behavior",
        RuleId::Deprecation => "deprecation with warning; shim kept through the window",
        RuleId::Unclassified => "no rule matched",
        RuleId::WindowViolation => "deprecated symbol removed inside its window",
        RuleId::SevereBugException => "case-by-case exception for a severe bug",
    }
}

/// Predicate of a catalog rule; engine outcomes never match
pub fn rule_matches(rule: RuleId, change: &ChangeRecord) -> bool {
    let kind = change.kind;
    let symbol_kind = change.symbol_kind();

    match rule {
        RuleId::Addition => matches!(kind, ChangeKind::Added | ChangeKind::ParamAdded),
        RuleId::DeprecatedRemoval => {
            kind.drops_identity() && change.old.as_ref().is_some_and(|s| s.is_deprecated())
        }
        RuleId::ModuleRemoval => kind.drops_identity() && symbol_kind == SymbolKind::Module,
        RuleId::OptionRemoval => kind.drops_identity() && symbol_kind == SymbolKind::Option,
        RuleId::ParamRemoval => {
            kind == ChangeKind::ParamRemoved
                || (kind == ChangeKind::Removed && symbol_kind == SymbolKind::Parameter)
        }
        RuleId::BugFix => kind == ChangeKind::BehaviorChanged && change.annotations.bug_fix,
        RuleId::BehaviorChange => kind == ChangeKind::BehaviorChanged,
        RuleId::Deprecation => kind == ChangeKind::Deprecated,
        RuleId::Unclassified | RuleId::WindowViolation | RuleId::SevereBugException => false,
    }
}

/// Ordered list of catalog rules; first match wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    order: Vec<RuleId>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            order: RuleId::CATALOG.to_vec(),
        }
    }
}

impl RuleSet {
    /// Build from configured identifiers, rejecting unknown and repeated ids
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> WardenResult<Self> {
        let mut order = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            let rule = RuleId::from_catalog_id(id).ok_or_else(|| WardenError::UnknownRule {
                id: id.to_string(),
            })?;
            if order.contains(&rule) {
                return Err(WardenError::DuplicateRule { id: id.to_string() });
            }
            order.push(rule);
        }
        Ok(Self { order })
    }

    pub fn rules(&self) -> &[RuleId] {
        &self.order
    }

    /// First rule in priority order whose predicate matches
    pub fn first_match(&self, change: &ChangeRecord) -> Option<RuleId> {
        self.order
            .iter()
            .copied()
            .find(|rule| rule_matches(*rule, change))
    }
}
