//! Snapshot entity - the API surface at one released version
//!
//! A snapshot is validated once at construction and never mutated afterwards.
//! Symbols are kept ordered by path so every traversal is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ApiSymbol;
use crate::domain::value_objects::{ReleaseVersion, SymbolPath};
use crate::error::{WardenError, WardenResult};

/// Wire form of a snapshot: a version label and a list of symbol descriptors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SnapshotDocument {
    pub version: ReleaseVersion,
    #[serde(default)]
    pub symbols: Vec<ApiSymbol>,
}

/// Immutable, path-ordered set of API symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    version: ReleaseVersion,
    symbols: BTreeMap<SymbolPath, ApiSymbol>,
    fingerprint: String,
}

impl Snapshot {
    /// Build a snapshot, rejecting duplicate identities and deprecations
    /// dated after the snapshot's own version.
    pub fn new(version: ReleaseVersion, symbols: Vec<ApiSymbol>) -> WardenResult<Self> {
        let mut by_path = BTreeMap::new();

        for symbol in symbols {
            if let Some(since) = &symbol.deprecated_since {
                if since.cmp_minor_line(&version).is_gt() {
                    return Err(WardenError::DeprecationFromFuture {
                        path: symbol.path.to_string(),
                        since: since.to_string(),
                        version: version.to_string(),
                    });
                }
            }

            if by_path.contains_key(&symbol.path) {
                return Err(WardenError::DuplicateSymbol {
                    path: symbol.path.to_string(),
                    version: version.to_string(),
                });
            }
            by_path.insert(symbol.path.clone(), symbol);
        }

        let mut snapshot = Self {
            version,
            symbols: by_path,
            fingerprint: String::new(),
        };
        snapshot.fingerprint = fingerprint_of(&snapshot.to_document())?;
        Ok(snapshot)
    }

    pub fn from_document(document: SnapshotDocument) -> WardenResult<Self> {
        Self::new(document.version, document.symbols)
    }

    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    pub fn get(&self, path: &str) -> Option<&ApiSymbol> {
        self.symbols.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.symbols.contains_key(path)
    }

    /// Symbols in path order
    pub fn symbols(&self) -> impl Iterator<Item = &ApiSymbol> {
        self.symbols.values()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn to_document(&self) -> SnapshotDocument {
        SnapshotDocument {
            version: self.version.clone(),
            symbols: self.symbols.values().cloned().collect(),
        }
    }

    /// SHA-256 of the canonical JSON form, prefixed with `sha256:`
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint_of(document: &SnapshotDocument) -> WardenResult<String> {
    let canonical = serde_json::to_vec(document).map_err(|e| WardenError::Serialization {
        version: document.version.to_string(),
        message: e.to_string(),
    })?;
    Ok(format!("sha256:{:x}", Sha256::digest(&canonical)))
}

impl TryFrom<SnapshotDocument> for Snapshot {
    type Error = WardenError;

    fn try_from(document: SnapshotDocument) -> Result<Self, Self::Error> {
        Self::from_document(document)
    }
}
