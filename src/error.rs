//! Error types for apiwarden
//!
//! Uses `thiserror` for library errors. Every variant here is a
//! configuration error: it makes the whole run meaningless, so the check
//! use case reports it instead of producing verdicts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apiwarden operations
pub type WardenResult<T> = Result<T, WardenError>;

/// Main error type for apiwarden operations
#[derive(Error, Debug)]
pub enum WardenError {
    /// Two symbols in one snapshot share an identity
    #[error("duplicate symbol '{path}' in snapshot {version}")]
    DuplicateSymbol { path: String, version: String },

    /// Symbol path that cannot identify anything
    #[error("invalid symbol path '{path}': {reason}")]
    InvalidSymbolPath { path: String, reason: String },

    /// Release version label that is not `MAJOR.MINOR[.PATCH][suffix]`
    #[error("invalid release version '{value}'")]
    InvalidVersion { value: String },

    /// A symbol claims a deprecation from a release newer than its snapshot
    #[error("symbol '{path}' is deprecated since {since}, after snapshot version {version}")]
    DeprecationFromFuture {
        path: String,
        since: String,
        version: String,
    },

    /// Caller-supplied rename pair that does not line up with the snapshots
    #[error("invalid rename '{from}' -> '{to}': {reason}")]
    InvalidRename {
        from: String,
        to: String,
        reason: String,
    },

    /// Bug-fix or exception entry naming a path no change touches
    #[error("{section} entry '{path}' does not match any change")]
    UnmatchedAnnotation { section: String, path: String },

    /// Rule identifier that is not part of the catalog
    #[error("unknown rule '{id}'")]
    UnknownRule { id: String },

    /// Rule identifier listed twice in the configured order
    #[error("rule '{id}' is listed more than once")]
    DuplicateRule { id: String },

    /// Exclusion pattern rejected by the matcher
    #[error("invalid exclusion pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Input file could not be parsed
    #[error("failed to parse {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Snapshot could not be serialized for fingerprinting
    #[error("failed to serialize snapshot {version}: {message}")]
    Serialization { version: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WardenError {
    /// Stable machine-readable code used in JSON reports.
    pub fn code(&self) -> &'static str {
        match self {
            WardenError::DuplicateSymbol { .. } => "duplicate-symbol",
            WardenError::InvalidSymbolPath { .. } => "invalid-symbol-path",
            WardenError::InvalidVersion { .. } => "invalid-version",
            WardenError::DeprecationFromFuture { .. } => "deprecation-from-future",
            WardenError::InvalidRename { .. } => "invalid-rename",
            WardenError::UnmatchedAnnotation { .. } => "unmatched-annotation",
            WardenError::UnknownRule { .. } => "unknown-rule",
            WardenError::DuplicateRule { .. } => "duplicate-rule",
            WardenError::InvalidPattern { .. } => "invalid-pattern",
            WardenError::Parse { .. } => "parse",
            WardenError::Serialization { .. } => "serialization",
            WardenError::Io(_) => "io",
        }
    }
}
