//! Configuration module for apiwarden
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APIWARDEN_*)
//! 3. Project config (`apiwarden.toml`, or `--config`)
//! 4. User config (`<config dir>/apiwarden/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, PolicyConfig, ScopeConfig};
