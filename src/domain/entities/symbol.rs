//! ApiSymbol entity - one public API unit at one point in history
//!
//! Symbols arrive from an external source parser as snapshot descriptors and
//! are owned by exactly one `Snapshot`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ReleaseVersion, SymbolKind, SymbolPath};

/// A module, method, option or parameter in an API snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ApiSymbol {
    /// Identity (`module/path::member`)
    pub path: SymbolPath,
    pub kind: SymbolKind,
    /// Marked as part of the public API; omitted means public
    #[serde(default = "default_public")]
    pub public: bool,
    /// Ordered parameter names (methods only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    /// Caller-declared behavior tag; a change in tag is a behavior change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior_tag: Option<String>,
    /// Release in which the symbol was deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_since: Option<ReleaseVersion>,
}

fn default_public() -> bool {
    true
}

impl ApiSymbol {
    /// Create a public symbol with no parameters, tag or deprecation
    pub fn new(path: SymbolPath, kind: SymbolKind) -> Self {
        Self {
            path,
            kind,
            public: true,
            params: Vec::new(),
            behavior_tag: None,
            deprecated_since: None,
        }
    }

    pub fn with_public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_behavior_tag(mut self, tag: impl Into<String>) -> Self {
        self.behavior_tag = Some(tag.into());
        self
    }

    pub fn with_deprecated_since(mut self, since: ReleaseVersion) -> Self {
        self.deprecated_since = Some(since);
        self
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated_since.is_some()
    }
}
