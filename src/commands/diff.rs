use std::path::PathBuf;

use anyhow::Result;
use apiwarden::application::{CheckRequest, CheckUseCase, EXIT_CONFIG_ERROR, EXIT_OK};
use apiwarden::infrastructure::{FileSnapshotSource, TomlChangeSetSource};
use apiwarden::PolicyEngine;

use super::GlobalArgs;
use crate::cli::SnapshotArgs;
use crate::ui::views::diff::render_changes;

pub fn cmd_diff(snapshots: &SnapshotArgs, changes: Option<PathBuf>, global: &GlobalArgs) -> Result<i32> {
    let config = global.load_config()?;
    let ui = global.ui(&config);

    let mut request = CheckRequest::new(&snapshots.old, &snapshots.new);
    if let Some(changes) = changes {
        request = request.with_changes(changes);
    }

    let use_case = CheckUseCase::new(
        FileSnapshotSource::new(),
        TomlChangeSetSource::new(),
        PolicyEngine::default(),
    );

    match use_case.diff(&request) {
        Ok(records) => {
            if ui.json {
                crate::ui::json::emit(&serde_json::json!({ "changes": records }))?;
            } else {
                print!("{}", render_changes(&records, ui.color));
            }
            Ok(EXIT_OK)
        }
        Err(err) => {
            if ui.json {
                crate::ui::json::emit(&serde_json::json!({
                    "errors": [{ "code": err.code(), "message": err.to_string() }]
                }))?;
            } else {
                eprintln!("Error: {}", err);
            }
            Ok(EXIT_CONFIG_ERROR)
        }
    }
}
