use anyhow::Result;
use apiwarden::application::EXIT_OK;
use apiwarden::domain::policies::{rule_description, rule_effect, RuleEffect};

use super::GlobalArgs;
use crate::ui::views::rules::render_rules;

/// List the configured rule order (the catalog order by default)
pub fn cmd_rules(global: &GlobalArgs) -> Result<i32> {
    let config = global.load_config()?;
    let ui = global.ui(&config);

    let rules = config.rule_set()?;

    if ui.json {
        let entries: Vec<_> = rules
            .rules()
            .iter()
            .map(|rule| {
                let effect = match rule_effect(*rule) {
                    RuleEffect::Allow => "allow",
                    RuleEffect::Disallow => "disallow",
                    RuleEffect::Warn => "window",
                };
                serde_json::json!({
                    "id": rule,
                    "effect": effect,
                    "description": rule_description(*rule),
                })
            })
            .collect();
        crate::ui::json::emit(&serde_json::json!({ "rules": entries }))?;
    } else {
        print!("{}", render_rules(rules.rules(), ui.color));
    }

    Ok(EXIT_OK)
}
