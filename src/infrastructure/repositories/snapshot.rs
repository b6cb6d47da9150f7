//! File Snapshot Source
//!
//! Implements the SnapshotSource port for JSON and YAML snapshot files.
//! The format is chosen by extension: `.yaml`/`.yml` is YAML, anything
//! else is JSON.

use std::path::Path;

use crate::domain::entities::{Snapshot, SnapshotDocument};
use crate::domain::ports::SnapshotSource;
use crate::error::{WardenError, WardenResult};

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SnapshotFormat::Yaml
            }
            _ => SnapshotFormat::Json,
        }
    }
}

/// Reads snapshot documents from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSnapshotSource;

impl FileSnapshotSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse snapshot content that was read from `path`
    pub fn parse(content: &str, path: &Path) -> WardenResult<Snapshot> {
        let parse_error = |message: String| WardenError::Parse {
            file: path.to_path_buf(),
            message,
        };

        let document: SnapshotDocument = match SnapshotFormat::from_path(path) {
            SnapshotFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            SnapshotFormat::Yaml => {
                serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        Snapshot::from_document(document)
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn load_snapshot(&self, path: &Path) -> WardenResult<Snapshot> {
        let content = std::fs::read_to_string(path).map_err(|e| WardenError::Parse {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let snapshot = Self::parse(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            version = %snapshot.version(),
            symbols = snapshot.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }
}
