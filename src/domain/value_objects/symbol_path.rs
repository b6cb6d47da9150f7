//! Symbol Path Value Object
//!
//! The identity of an API symbol: `module/path::member`. A path without `::`
//! names a module, whose member name is its last segment.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WardenError;

/// Separator between the module path and the member name
pub const MEMBER_SEPARATOR: &str = "::";

/// Validated symbol identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolPath(String);

impl SymbolPath {
    pub fn new(raw: impl Into<String>) -> Result<Self, WardenError> {
        let raw = raw.into();
        let invalid = |reason: &str| WardenError::InvalidSymbolPath {
            path: raw.clone(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("path is empty"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("path contains whitespace"));
        }
        if raw.matches(MEMBER_SEPARATOR).count() > 1 {
            return Err(invalid("path has more than one '::'"));
        }

        let (module, member) = match raw.split_once(MEMBER_SEPARATOR) {
            Some((module, member)) => (module, Some(member)),
            None => (raw.as_str(), None),
        };
        if module.is_empty() || module.split('/').any(str::is_empty) {
            return Err(invalid("module path has an empty segment"));
        }
        if member.is_some_and(str::is_empty) {
            return Err(invalid("member name is empty"));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `/`-separated module part of the path
    pub fn module_path(&self) -> &str {
        match self.0.split_once(MEMBER_SEPARATOR) {
            Some((module, _)) => module,
            None => &self.0,
        }
    }

    /// Member name, or the last module segment for module paths
    pub fn member_name(&self) -> &str {
        match self.0.split_once(MEMBER_SEPARATOR) {
            Some((_, member)) => member,
            None => self.0.rsplit('/').next().unwrap_or(&self.0),
        }
    }

    /// Module that contains this symbol; `None` for a top-level module
    pub fn parent_module(&self) -> Option<&str> {
        match self.0.split_once(MEMBER_SEPARATOR) {
            Some((module, _)) => Some(module),
            None => self.0.rsplit_once('/').map(|(parent, _)| parent),
        }
    }

    /// Returns true if this path names a module rather than a member
    pub fn is_module_path(&self) -> bool {
        !self.0.contains(MEMBER_SEPARATOR)
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SymbolPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Ord, Eq and Hash all derive from the inner string, so map lookups by &str agree.
impl Borrow<str> for SymbolPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for SymbolPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SymbolPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SymbolPath::new(raw).map_err(serde::de::Error::custom)
    }
}
