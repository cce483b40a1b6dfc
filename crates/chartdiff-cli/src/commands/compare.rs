//! Compare command - diff template files between two package versions

use chartdiff_core::{CompareSession, ContextWindow, decode_templates, diff_template};
use chartdiff_registry::RegistryClient;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::display;

pub async fn run(
    registry: &str,
    package_id: &str,
    version: &str,
    to: &str,
    context: usize,
    expanded: bool,
    filter: Option<&str>,
    template: Option<&str>,
) -> Result<()> {
    let client = RegistryClient::new(registry).into_diagnostic()?;

    // The viewed version must load; without it there is nothing to compare
    let current_entries = client
        .chart_templates(package_id, version)
        .await
        .into_diagnostic()?;
    let current = decode_templates(&current_entries);

    let mut session = CompareSession::new(current);

    // A failed reference fetch degrades to an empty comparison
    match client.chart_templates(package_id, to).await {
        Ok(entries) => {
            let reference = decode_templates(&entries);
            session.set_reference(Some(&reference));
        }
        Err(e) => {
            eprintln!(
                "{} Could not load version {}: {}",
                style("⚠").yellow(),
                to,
                e
            );
            session.set_reference(None);
        }
    }

    if let Some(filter) = filter {
        session.set_filter(filter);
    }

    println!(
        "{} Comparing {} version {} to {}: {}",
        style("→").blue(),
        package_id,
        style(version).bold(),
        style(to).bold(),
        style(session.summary()).bold()
    );

    if session.templates().is_empty() {
        println!(
            "  No changes found when comparing version {} to {}",
            version, to
        );
        return Ok(());
    }

    if session.visible().is_empty() {
        println!("  No templates match filter {:?}", session.filter_text());
        return Ok(());
    }

    let window = if expanded {
        ContextWindow::Full
    } else {
        ContextWindow::Lines(context)
    };

    if let Some(name) = template {
        if !session.select(name) {
            eprintln!(
                "{} Template {} is not part of this comparison, showing {} instead",
                style("⚠").yellow(),
                name,
                session
                    .active()
                    .map(|t| t.name.as_str())
                    .unwrap_or("nothing")
            );
        }
        if let (Some(active), Some(diff)) = (session.active(), session.diff(window)) {
            println!();
            display::print_file_diff(active, &diff, to, version);
        }
        return Ok(());
    }

    for entry in session.visible() {
        let diff = diff_template(entry, window);
        println!();
        display::print_file_diff(entry, &diff, to, version);
    }

    Ok(())
}
