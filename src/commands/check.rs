use std::path::PathBuf;

use anyhow::Result;
use apiwarden::application::{CheckRequest, CheckUseCase, PolicyReport};
use apiwarden::config::Config;
use apiwarden::infrastructure::{FileSnapshotSource, TomlChangeSetSource};
use apiwarden::WardenResult;

use super::GlobalArgs;
use crate::cli::SnapshotArgs;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

/// CLI overrides for the policy section
#[derive(Debug, Clone, Default)]
pub struct PolicyOverrides {
    pub window: Option<u64>,
    pub rules: Option<Vec<String>>,
}

impl PolicyOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(window) = self.window {
            config.policy.window = window;
        }
        if let Some(rules) = &self.rules {
            config.policy.rules = rules.clone();
        }
    }
}

pub fn cmd_check(
    snapshots: &SnapshotArgs,
    changes: Option<PathBuf>,
    overrides: &PolicyOverrides,
    global: &GlobalArgs,
) -> Result<i32> {
    let mut request = CheckRequest::new(&snapshots.old, &snapshots.new);
    if let Some(changes) = changes {
        request = request.with_changes(changes);
    }

    let (config, report) = match global.load_config() {
        Ok(mut config) => {
            overrides.apply(&mut config);
            let report = run_check(&config, &request).unwrap_or_else(|err| {
                tracing::error!(code = err.code(), "{}", err);
                PolicyReport::from_errors([&err])
            });
            (config, report)
        }
        Err(err) => {
            tracing::error!(code = err.code(), "{}", err);
            (Config::default(), PolicyReport::from_errors([&err]))
        }
    };

    let ui = global.ui(&config);
    if ui.json {
        crate::ui::json::emit(&report)?;
    } else {
        print!("{}", render_check_header(&report, ui.color));
        print!("{}", render_check_report(&report, ui.verbose, ui.color, ui.unicode));
        print!("{}", render_check_summary(&report, ui.color));
    }

    Ok(report.exit_code())
}

fn run_check(config: &Config, request: &CheckRequest) -> WardenResult<PolicyReport> {
    let engine = config.engine()?;
    let use_case = CheckUseCase::new(FileSnapshotSource::new(), TomlChangeSetSource::new(), engine);
    Ok(use_case.execute(request))
}
