//! Templates command - list a version's template files

use chartdiff_core::decode_templates;
use chartdiff_registry::RegistryClient;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::display;

pub async fn run(registry: &str, package_id: &str, version: &str, json: bool) -> Result<()> {
    let client = RegistryClient::new(registry).into_diagnostic()?;
    let entries = client
        .chart_templates(package_id, version)
        .await
        .into_diagnostic()?;

    let files = decode_templates(&entries);

    if json {
        let output = serde_json::to_string_pretty(&files).into_diagnostic()?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "{} {} template file(s) in {} {}",
        style("→").blue(),
        files.len(),
        package_id,
        style(version).bold()
    );
    println!();
    display::print_template_list(&files);

    Ok(())
}
