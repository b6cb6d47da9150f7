//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::policies::{ExclusionPolicy, RuleSet, DEFAULT_EXCLUDE};
use crate::domain::services::{DeprecationWindowTracker, PolicyEngine, DEFAULT_WINDOW};
use crate::domain::value_objects::{ConfigWarning, RuleId};
use crate::error::WardenResult;

use super::loader;

/// Rule order and deprecation window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Catalog rule ids in priority order
    #[serde(default = "default_rules")]
    pub rules: Vec<String>,

    /// Minor releases a deprecated symbol must survive
    #[serde(default = "default_window")]
    pub window: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            window: default_window(),
        }
    }
}

fn default_rules() -> Vec<String> {
    RuleId::CATALOG.iter().map(|r| r.as_str().to_string()).collect()
}

fn default_window() -> u64 {
    DEFAULT_WINDOW
}

/// Which symbols the policy sees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Gitignore-style patterns over module paths
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub include_non_public: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            include_non_public: false,
        }
    }
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDE.iter().map(|p| p.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub scope: ScopeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WardenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WardenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load through the full hierarchy: explicit file or project
    /// `apiwarden.toml`, then user config, then defaults; environment
    /// overrides applied last.
    pub fn load_layered(
        explicit: Option<&Path>,
        project_root: &Path,
    ) -> WardenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(explicit, project_root, dirs::config_dir().as_deref())
    }

    /// Apply environment variable overrides (APIWARDEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn rule_set(&self) -> WardenResult<RuleSet> {
        RuleSet::from_ids(&self.policy.rules)
    }

    pub fn exclusion_policy(&self) -> WardenResult<ExclusionPolicy> {
        ExclusionPolicy::new(&self.scope.exclude, self.scope.include_non_public)
    }

    pub fn window_tracker(&self) -> DeprecationWindowTracker {
        DeprecationWindowTracker::new(self.policy.window)
    }

    /// Assemble the policy engine this configuration describes
    pub fn engine(&self) -> WardenResult<PolicyEngine> {
        Ok(PolicyEngine::new(
            self.rule_set()?,
            self.exclusion_policy()?,
            self.window_tracker(),
        ))
    }
}
