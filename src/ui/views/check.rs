use apiwarden::application::{PolicyReport, ReportEntry};
use apiwarden::domain::value_objects::VerdictKind;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::diff::describe_change;

pub fn render_check_header(report: &PolicyReport, supports_color: bool) -> String {
    let title = ColoredText::plain("apiwarden check").bold().render(supports_color);
    match (&report.old, &report.new) {
        (Some(old), Some(new)) => format!("{}  {} -> {}\n\n", title, old.version, new.version),
        _ => format!("{}\n\n", title),
    }
}

fn render_entry(entry: &ReportEntry, verbose: u8, supports_color: bool, supports_unicode: bool) -> String {
    let (icon, verdict) = match entry.verdict {
        VerdictKind::Allowed => (Icon::Success, ColoredText::success("allowed   ")),
        VerdictKind::Warn => (Icon::Warning, ColoredText::warning("warn      ")),
        VerdictKind::Disallowed => (Icon::Error, ColoredText::error("disallowed")),
    };

    let mut out = format!(
        "{} {} {:<20} {}\n",
        icon.colored(supports_unicode).render(supports_color),
        verdict.render(supports_color),
        entry.rule_id.as_str(),
        describe_change(&entry.change)
    );

    if let Some(window) = &entry.window {
        let arrow = Icon::Arrow.colored(supports_unicode).render(supports_color);
        let detail = format!(
            "deprecated since {}; keep a shim through {}.{}, removable from {}",
            window.deprecated_since,
            window.last_supported.major(),
            window.last_supported.minor(),
            window.earliest_removal
        );
        out.push_str(&format!("    {} {}\n", arrow, ColoredText::dim(detail).render(supports_color)));
    } else if verbose > 0 && entry.verdict == VerdictKind::Disallowed {
        let arrow = Icon::Arrow.colored(supports_unicode).render(supports_color);
        let hint = apiwarden::domain::policies::rule_description(entry.rule_id);
        out.push_str(&format!("    {} {}\n", arrow, ColoredText::dim(hint).render(supports_color)));
    }

    out
}

pub fn render_check_report(
    report: &PolicyReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for error in &report.errors {
        out.push_str(&format!(
            "{} {} {}\n",
            Icon::Error.colored(supports_unicode).render(supports_color),
            ColoredText::error(format!("configuration error [{}]:", error.code)).render(supports_color),
            error.message
        ));
    }

    for entry in &report.entries {
        out.push_str(&render_entry(entry, verbose, supports_color, supports_unicode));
    }

    if verbose > 0 {
        for (label, info) in [("old", &report.old), ("new", &report.new)] {
            if let Some(info) = info {
                out.push_str(&format!(
                    "{}\n",
                    ColoredText::dim(format!(
                        "{} {} ({} symbols) {}",
                        label, info.version, info.symbols, info.fingerprint
                    ))
                    .render(supports_color)
                ));
            }
        }
    }

    out
}

pub fn render_check_summary(report: &PolicyReport, supports_color: bool) -> String {
    let summary = &report.summary;
    let title = if report.has_errors() {
        ColoredText::error("Check could not run").bold()
    } else if report.has_violations() {
        ColoredText::error("Check FAILED").bold()
    } else if summary.warned > 0 {
        ColoredText::warning("Check passed with warnings").bold()
    } else {
        ColoredText::success("Check passed").bold()
    };

    format!(
        "\n{}: {} allowed, {} warned, {} disallowed, {} excluded\n",
        title.render(supports_color),
        summary.allowed,
        summary.warned,
        summary.disallowed,
        summary.excluded
    )
}
