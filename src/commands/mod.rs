//! Command handlers
//!
//! Each handler returns the process exit code; `main` only maps `Err` to a
//! configuration failure.

use std::path::PathBuf;

use apiwarden::config::Config;
use apiwarden::WardenResult;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;

pub mod check;
pub mod diff;
pub mod rules;
pub mod suggest;
pub mod window;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub verbose: u8,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn ui(&self, config: &Config) -> UiContext {
        UiContext::new(self.json, self.verbose, self.color, config)
    }

    /// Configuration for the current directory, honoring `--config`.
    ///
    /// Unknown keys are logged as warnings by the loader.
    pub fn load_config(&self) -> WardenResult<Config> {
        let cwd = std::env::current_dir()?;
        let (config, _warnings) = Config::load_layered(self.config.as_deref(), &cwd)?;
        Ok(config)
    }
}
