//! Verdict value objects
//!
//! The classification attached to one detected change, plus the deprecation
//! window status carried by warnings.

use serde::Serialize;

use super::ReleaseVersion;

/// Where a deprecated symbol stands in its deprecation window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowStatus {
    /// Release in which the deprecation was introduced
    pub deprecated_since: ReleaseVersion,
    /// Release the status was computed against
    pub current: ReleaseVersion,
    /// The symbol must still function in `current`
    pub still_required: bool,
    /// Last minor line in which the symbol must still function
    pub last_supported: ReleaseVersion,
    /// First release in which removal is permitted
    pub earliest_removal: ReleaseVersion,
}

/// Coarse verdict category, as written to reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Allowed,
    Disallowed,
    Warn,
}

impl std::fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictKind::Allowed => write!(f, "allowed"),
            VerdictKind::Disallowed => write!(f, "disallowed"),
            VerdictKind::Warn => write!(f, "warn"),
        }
    }
}

/// Policy verdict for one change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Disallowed,
    /// Allowed, but a compatibility shim must survive the deprecation window
    Warn(WindowStatus),
}

impl Verdict {
    pub fn kind(&self) -> VerdictKind {
        match self {
            Verdict::Allowed => VerdictKind::Allowed,
            Verdict::Disallowed => VerdictKind::Disallowed,
            Verdict::Warn(_) => VerdictKind::Warn,
        }
    }

    pub fn window(&self) -> Option<&WindowStatus> {
        match self {
            Verdict::Warn(status) => Some(status),
            _ => None,
        }
    }

    pub fn is_disallowed(&self) -> bool {
        matches!(self, Verdict::Disallowed)
    }
}
