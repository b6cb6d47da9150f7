use apiwarden::domain::services::RenameSuggestion;

use crate::ui::primitives::text::ColoredText;

/// Suggestions as ready-to-paste `[[rename]]` entries
pub fn render_suggestions(suggestions: &[RenameSuggestion], supports_color: bool) -> String {
    if suggestions.is_empty() {
        return format!("{}\n", ColoredText::dim("No rename candidates").render(supports_color));
    }

    let mut out = String::new();
    for suggestion in suggestions {
        out.push_str(&format!(
            "{}\n[[rename]]\nfrom = \"{}\"\nto = \"{}\"\n\n",
            ColoredText::dim(format!(
                "# {} similarity {:.2}",
                suggestion.kind, suggestion.similarity
            ))
            .render(supports_color),
            suggestion.from,
            suggestion.to
        ));
    }
    out
}
