use anyhow::Result;
use apiwarden::application::{EXIT_CONFIG_ERROR, EXIT_OK};
use apiwarden::{DeprecationWindowTracker, ReleaseVersion};

use super::GlobalArgs;
use crate::ui::views::window::render_window_status;

pub fn cmd_window(
    since: &ReleaseVersion,
    current: &ReleaseVersion,
    window: Option<u64>,
    global: &GlobalArgs,
) -> Result<i32> {
    let config = global.load_config()?;
    let ui = global.ui(&config);

    if current < since {
        eprintln!("Error: current release {} precedes deprecation release {}", current, since);
        return Ok(EXIT_CONFIG_ERROR);
    }

    let window = window.unwrap_or(config.policy.window);
    let status = DeprecationWindowTracker::new(window).status(since, current);

    if ui.json {
        crate::ui::json::emit(&serde_json::json!({
            "window": window,
            "status": status,
        }))?;
    } else {
        print!("{}", render_window_status(&status, window, ui.color, ui.unicode));
    }

    Ok(EXIT_OK)
}
