//! Pure formatting functions for UI output.
//!
//! The `render_*` functions build strings without printing so they can be
//! tested; `display_error` prints a single styled line.

use console::style;

use crate::cli::commands::{Comparison, ParseReport, Relation};
use crate::domain::parser::COMPONENT_NAMES;
use crate::domain::AnyVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

fn or_none(text: &str) -> String {
    if text.is_empty() {
        style("(none)").dim().to_string()
    } else {
        text.to_string()
    }
}

/// Render every field of a parsed version, one per line.
///
/// Revision is only listed for 4-component versions.
pub fn render_fields(report: &ParseReport) -> String {
    let version = &report.version;
    let mut lines = vec![format!(
        "{} {}",
        style("Version").bold(),
        style(&report.input).cyan()
    )];

    for (name, value) in COMPONENT_NAMES.iter().zip(version.numeric_core()) {
        lines.push(format!("  {:<15}{}", format!("{}:", name), value));
    }
    lines.push(format!(
        "  {:<15}{}",
        "pre-release:",
        or_none(version.pre_release())
    ));
    lines.push(format!(
        "  {:<15}{}",
        "build:",
        or_none(version.build_metadata())
    ));

    lines.join("\n")
}

/// Render the relation between two versions as a sentence.
pub fn render_comparison(comparison: &Comparison) -> String {
    let verb = match comparison.relation {
        Relation::Older => style("is older than").red(),
        Relation::Newer => style("is newer than").green(),
        Relation::Equal => style("is equal to").bold(),
        Relation::OrderedEqual => style("has the same precedence as").yellow(),
    };
    format!("{} {} {}", comparison.left, verb, comparison.right)
}

/// Render versions one per line, in the given order.
pub fn render_sorted(versions: &[AnyVersion]) -> String {
    versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
