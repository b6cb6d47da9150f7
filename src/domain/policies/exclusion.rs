//! Exclusion Policy
//!
//! Marks symbols that are outside the policy's scope: symbols not marked
//! public, and symbols whose module path matches an exclusion pattern.
//! Patterns use gitignore semantics over `/`-separated module paths, so
//! `exp/` excludes every module under a directory named `exp`.

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::domain::entities::{ApiSymbol, ChangeRecord};
use crate::error::{WardenError, WardenResult};

/// Patterns excluded when none are configured
pub const DEFAULT_EXCLUDE: &[&str] = &["exp/"];

/// Scope predicate for the policy engine
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    matcher: Gitignore,
    patterns: Vec<String>,
    include_non_public: bool,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDE, false).unwrap_or_else(|_| Self::none())
    }
}

impl ExclusionPolicy {
    /// Build a policy from gitignore-style patterns
    pub fn new<S: AsRef<str>>(patterns: &[S], include_non_public: bool) -> WardenResult<Self> {
        let mut builder = GitignoreBuilder::new("");
        let mut kept = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, pattern)
                .map_err(|e| WardenError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(pattern.to_string());
        }

        let matcher = builder.build().map_err(|e| WardenError::InvalidPattern {
            pattern: kept.join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            patterns: kept,
            include_non_public,
        })
    }

    /// Policy that excludes nothing, not even non-public symbols
    pub fn none() -> Self {
        Self {
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
            include_non_public: true,
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn includes_non_public(&self) -> bool {
        self.include_non_public
    }

    /// Returns true if the symbol is invisible to policy
    pub fn excludes(&self, symbol: &ApiSymbol) -> bool {
        if !symbol.public && !self.include_non_public {
            return true;
        }
        self.matcher
            .matched_path_or_any_parents(symbol.path.module_path(), true)
            .is_ignore()
    }

    /// Returns true if either side of the change is excluded
    pub fn excludes_change(&self, change: &ChangeRecord) -> bool {
        change.sides().any(|symbol| self.excludes(symbol))
    }
}
