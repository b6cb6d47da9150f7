//! Domain Policies
//!
//! Business rules that govern verdicts.
//! These are pure functions that operate on domain entities.

mod exclusion;
mod rules;

pub use exclusion::{ExclusionPolicy, DEFAULT_EXCLUDE};
pub use rules::{rule_description, rule_effect, rule_matches, RuleEffect, RuleSet};
