//! Display formatting for CLI output
//!
//! Renders template listings, comparison entries, and colored unified
//! diffs (including the "no newline at end of file" marker) to the
//! terminal.

use chartdiff_core::{CompareStatus, CompareTemplate, FileDiff, LineKind, TemplateFile, TemplateKind};
use console::style;

/// Print a version's template listing, one file per line
pub fn print_template_list(files: &[TemplateFile]) {
    for file in files {
        let legend = match file.kind {
            TemplateKind::Template => style("template").cyan(),
            TemplateKind::Helper => style("helper  ").magenta(),
        };
        if file.resource_kinds.is_empty() {
            println!("  {} {}", legend, file.name);
        } else {
            println!(
                "  {} {} {}",
                legend,
                file.name,
                style(format!("[{}]", file.resource_kinds.join(", "))).dim()
            );
        }
    }
}

/// Print one comparison record's diff with a header and hunk coloring
pub fn print_file_diff(entry: &CompareTemplate, diff: &FileDiff, old_label: &str, new_label: &str) {
    println!(
        "{} {} ({})",
        status_marker(entry.status),
        style(&entry.name).bold(),
        entry.status
    );
    println!(
        "  {} {} {} {}",
        style("changes from").dim(),
        old_label,
        style("to").dim(),
        new_label
    );

    if diff.hunks.is_empty() {
        println!("  {}", style("no changes").dim());
        return;
    }

    for hunk in &diff.hunks {
        println!("{}", style(hunk.header()).cyan());
        for line in &hunk.lines {
            match line.kind {
                LineKind::Added => println!("{}", style(format!("+{}", line.content)).green()),
                LineKind::Removed => println!("{}", style(format!("-{}", line.content)).red()),
                LineKind::Context => println!(" {}", line.content),
            }
        }
    }

    // Deleted records have no new side to contrast the old one against
    if !diff.old_has_trailing_newline && entry.status != CompareStatus::Deleted {
        println!("{}", style("\\ No newline at end of file").dim());
    }
}

fn status_marker(status: CompareStatus) -> console::StyledObject<&'static str> {
    match status {
        CompareStatus::Added => style("+").green(),
        CompareStatus::Modified => style("~").yellow(),
        CompareStatus::Deleted => style("-").red(),
    }
}
