use anyhow::Result;
use apiwarden::application::{CheckRequest, CheckUseCase, EXIT_CONFIG_ERROR, EXIT_OK};
use apiwarden::domain::services::RenameSuggester;
use apiwarden::infrastructure::{FileSnapshotSource, TomlChangeSetSource};
use apiwarden::PolicyEngine;

use super::GlobalArgs;
use crate::cli::SnapshotArgs;
use crate::ui::views::suggest::render_suggestions;

pub fn cmd_suggest_renames(snapshots: &SnapshotArgs, threshold: f32, global: &GlobalArgs) -> Result<i32> {
    let config = global.load_config()?;
    let ui = global.ui(&config);

    let use_case = CheckUseCase::new(
        FileSnapshotSource::new(),
        TomlChangeSetSource::new(),
        PolicyEngine::default(),
    );
    let request = CheckRequest::new(&snapshots.old, &snapshots.new);
    let suggester = RenameSuggester::new(threshold);

    match use_case.suggest_renames(&request, &suggester) {
        Ok(suggestions) => {
            if ui.json {
                crate::ui::json::emit(&serde_json::json!({
                    "threshold": suggester.threshold(),
                    "suggestions": suggestions,
                }))?;
            } else {
                print!("{}", render_suggestions(&suggestions, ui.color));
            }
            Ok(EXIT_OK)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(EXIT_CONFIG_ERROR)
        }
    }
}
