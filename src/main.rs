//! apiwarden CLI - deprecation policy compliance checker
//!
//! Usage: apiwarden <COMMAND>
//!
//! Commands:
//!   check            Classify API changes and enforce deprecation windows
//!   diff             List detected changes without verdicts
//!   window           Show the deprecation window for a symbol
//!   rules            List the rule catalog in priority order
//!   suggest-renames  Propose rename annotations

mod cli;
mod commands;
mod ui;

use std::io::{self, Write};

use apiwarden::application::EXIT_CONFIG_ERROR;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};
use commands::check::PolicyOverrides;
use commands::GlobalArgs;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "APIWARDEN_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            EXIT_CONFIG_ERROR
        }
    };
    let code = flush_output(&mut io::stdout(), code);
    std::process::exit(code);
}

/// Flush buffered output; a report that never reached the reader is a failed run
fn flush_output(out: &mut impl Write, code: i32) -> i32 {
    match out.flush() {
        Ok(()) => code,
        Err(err) => {
            eprintln!("Error: failed to write output: {}", err);
            EXIT_CONFIG_ERROR
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false),
        )
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let global = GlobalArgs {
        json: cli.json,
        color: cli.color,
        verbose: cli.verbose,
        config: cli.config,
    };

    match cli.command {
        Commands::Check {
            snapshots,
            changes,
            window,
            rules,
        } => commands::check::cmd_check(
            &snapshots,
            changes,
            &PolicyOverrides { window, rules },
            &global,
        ),
        Commands::Diff { snapshots, changes } => {
            commands::diff::cmd_diff(&snapshots, changes, &global)
        }
        Commands::Window {
            since,
            current,
            window,
        } => commands::window::cmd_window(&since, &current, window, &global),
        Commands::Rules => commands::rules::cmd_rules(&global),
        Commands::SuggestRenames {
            snapshots,
            threshold,
        } => commands::suggest::cmd_suggest_renames(&snapshots, threshold, &global),
    }
}
