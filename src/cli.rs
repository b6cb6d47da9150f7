//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands.

use std::path::PathBuf;

use apiwarden::ReleaseVersion;
use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// apiwarden - deprecation policy compliance checker
#[derive(Parser, Debug)]
#[command(name = "apiwarden")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./apiwarden.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The snapshot pair every comparing command takes
#[derive(clap::Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot of the previous release (JSON or YAML)
    #[arg(long)]
    pub old: PathBuf,

    /// Snapshot of the candidate release (JSON or YAML)
    #[arg(long)]
    pub new: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every API change and enforce deprecation windows
    Check {
        #[command(flatten)]
        snapshots: SnapshotArgs,

        /// Rename, bug-fix and exception annotations (TOML)
        #[arg(long)]
        changes: Option<PathBuf>,

        /// Minor releases a deprecated symbol must survive
        #[arg(long)]
        window: Option<u64>,

        /// Rule priority order, comma separated
        #[arg(long, value_delimiter = ',')]
        rules: Option<Vec<String>>,
    },

    /// List detected changes without verdicts
    Diff {
        #[command(flatten)]
        snapshots: SnapshotArgs,

        /// Rename, bug-fix and exception annotations (TOML)
        #[arg(long)]
        changes: Option<PathBuf>,
    },

    /// Show the deprecation window for a symbol
    Window {
        /// Release that introduced the deprecation
        #[arg(long)]
        since: ReleaseVersion,

        /// Release being evaluated
        #[arg(long)]
        current: ReleaseVersion,

        /// Minor releases a deprecated symbol must survive
        #[arg(long)]
        window: Option<u64>,
    },

    /// List the rule catalog in priority order
    Rules,

    /// Propose rename annotations for removed and added symbols
    SuggestRenames {
        #[command(flatten)]
        snapshots: SnapshotArgs,

        /// Minimum path similarity between 0 and 1
        #[arg(long, default_value_t = apiwarden::domain::services::DEFAULT_THRESHOLD)]
        threshold: f32,
    },
}
