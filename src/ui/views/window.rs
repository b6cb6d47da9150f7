use apiwarden::domain::value_objects::WindowStatus;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_window_status(
    status: &WindowStatus,
    window: u64,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, verdict) = if status.still_required {
        (Icon::Warning, ColoredText::warning("still required"))
    } else {
        (Icon::Success, ColoredText::success("removal permitted"))
    };

    format!(
        "{} {} in {}\n  deprecated since   {}\n  window             {} minor release(s)\n  last supported     {}.{}\n  earliest removal   {}\n",
        icon.colored(supports_unicode).render(supports_color),
        verdict.bold().render(supports_color),
        status.current,
        status.deprecated_since,
        window,
        status.last_supported.major(),
        status.last_supported.minor(),
        status.earliest_removal
    )
}
