use apiwarden::domain::policies::{rule_description, rule_effect, RuleEffect};
use apiwarden::domain::value_objects::RuleId;

use crate::ui::primitives::text::ColoredText;

pub fn render_rules(rules: &[RuleId], supports_color: bool) -> String {
    let mut out = String::new();
    for (index, rule) in rules.iter().enumerate() {
        let effect = match rule_effect(*rule) {
            RuleEffect::Allow => ColoredText::success("allow   "),
            RuleEffect::Disallow => ColoredText::error("disallow"),
            RuleEffect::Warn => ColoredText::warning("window  "),
        };
        out.push_str(&format!(
            "{:>2}. {:<20} {}  {}\n",
            index + 1,
            rule.as_str(),
            effect.render(supports_color),
            rule_description(*rule)
        ));
    }
    out
}
