//! Deprecation Window Tracker
//!
//! A symbol deprecated in `X.Y` must keep working through `X.(Y+window)`.
//! Removal is permitted from `X.(Y+window+1)` on, or in any later major
//! release.

use crate::domain::value_objects::{ReleaseVersion, WindowStatus};

/// Default number of minor releases a deprecated symbol must survive
pub const DEFAULT_WINDOW: u64 = 2;

/// Computes deprecation window status for deprecated symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecationWindowTracker {
    window: u64,
}

impl Default for DeprecationWindowTracker {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl DeprecationWindowTracker {
    pub fn new(window: u64) -> Self {
        Self { window }
    }

    pub fn window(&self) -> u64 {
        self.window
    }

    /// Last minor line in which the symbol must still function
    pub fn last_supported(&self, deprecated_since: &ReleaseVersion) -> ReleaseVersion {
        deprecated_since.bump_minor(self.window)
    }

    /// First release in which removal is permitted
    pub fn earliest_removal(&self, deprecated_since: &ReleaseVersion) -> ReleaseVersion {
        deprecated_since.bump_minor(self.window.saturating_add(1))
    }

    /// Window status of a symbol deprecated in `deprecated_since`, as of `current`
    pub fn status(&self, deprecated_since: &ReleaseVersion, current: &ReleaseVersion) -> WindowStatus {
        let earliest_removal = self.earliest_removal(deprecated_since);
        let still_required = if current.major() > deprecated_since.major() {
            false
        } else {
            current.cmp_minor_line(&earliest_removal).is_lt()
        };

        WindowStatus {
            deprecated_since: deprecated_since.clone(),
            current: current.clone(),
            still_required,
            last_supported: self.last_supported(deprecated_since),
            earliest_removal,
        }
    }
}
