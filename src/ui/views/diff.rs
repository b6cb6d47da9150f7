use apiwarden::domain::entities::{ChangeKind, ChangeRecord};

use crate::ui::primitives::text::ColoredText;

/// One-line description of what changed, e.g. `a::m (param-added +b)`
pub fn describe_change(change: &ChangeRecord) -> String {
    let mut out = change.path.to_string();
    if let Some(new_path) = change.new_path() {
        out.push_str(&format!(" -> {}", new_path));
    }

    let mut details = vec![change.kind.to_string()];
    details.extend(change.params_added.iter().map(|p| format!("+{}", p)));
    details.extend(change.params_removed.iter().map(|p| format!("-{}", p)));
    if change.annotations.bug_fix {
        details.push("bug fix".to_string());
    }
    if let Some(reason) = &change.annotations.exception {
        details.push(format!("exception: {}", reason));
    }

    out.push_str(&format!(" ({})", details.join(", ")));
    out
}

fn kind_color(kind: ChangeKind, text: String) -> ColoredText {
    match kind {
        ChangeKind::Added | ChangeKind::ParamAdded => ColoredText::success(text),
        ChangeKind::Deprecated => ColoredText::warning(text),
        ChangeKind::BehaviorChanged => ColoredText::info(text),
        ChangeKind::Removed
        | ChangeKind::Renamed
        | ChangeKind::Moved
        | ChangeKind::ParamRemoved => ColoredText::error(text),
    }
}

pub fn render_changes(changes: &[ChangeRecord], supports_color: bool) -> String {
    if changes.is_empty() {
        return format!("{}\n", ColoredText::dim("No API changes").render(supports_color));
    }

    let width = changes
        .iter()
        .map(|c| c.kind.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for change in changes {
        let label = format!("{:<width$}", change.kind.as_str(), width = width);
        out.push_str(&format!(
            "{}  {}\n",
            kind_color(change.kind, label).render(supports_color),
            describe_change(change)
        ));
    }
    out.push_str(&format!("\n{} change(s)\n", changes.len()));
    out
}
