//! Rule identifier value object
//!
//! Names every source a verdict can come from: the configurable catalog rules
//! plus the engine's own outcomes (`unclassified`, `window-violation`,
//! `severe-bug-exception`), which cannot be listed in configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the rule that produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    Addition,
    DeprecatedRemoval,
    ModuleRemoval,
    OptionRemoval,
    ParamRemoval,
    BugFix,
    BehaviorChange,
    Deprecation,
    /// No catalog rule matched; fail-closed default
    Unclassified,
    /// Deprecated symbol removed before its window elapsed
    WindowViolation,
    /// Caller-attached severe-bug override
    SevereBugException,
}

impl RuleId {
    /// Catalog rules in default priority order (highest first)
    pub const CATALOG: [RuleId; 8] = [
        RuleId::Addition,
        RuleId::DeprecatedRemoval,
        RuleId::ModuleRemoval,
        RuleId::OptionRemoval,
        RuleId::ParamRemoval,
        RuleId::BugFix,
        RuleId::BehaviorChange,
        RuleId::Deprecation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Addition => "addition",
            RuleId::DeprecatedRemoval => "deprecated-removal",
            RuleId::ModuleRemoval => "module-removal",
            RuleId::OptionRemoval => "option-removal",
            RuleId::ParamRemoval => "param-removal",
            RuleId::BugFix => "bug-fix",
            RuleId::BehaviorChange => "behavior-change",
            RuleId::Deprecation => "deprecation",
            RuleId::Unclassified => "unclassified",
            RuleId::WindowViolation => "window-violation",
            RuleId::SevereBugException => "severe-bug-exception",
        }
    }

    /// Look up a configurable catalog rule by its identifier
    pub fn from_catalog_id(id: &str) -> Option<RuleId> {
        Self::CATALOG.into_iter().find(|rule| rule.as_str() == id)
    }

    /// Returns true if this rule can appear in the configured rule order
    pub fn is_catalog(&self) -> bool {
        Self::CATALOG.contains(self)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
