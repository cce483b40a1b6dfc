//! Chartdiff CLI - inspect chart template changes between package versions

use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "chartdiff")]
#[command(author = "Chartdiff Contributors")]
#[command(version)]
#[command(about = "Inspect chart template changes between package versions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry base URL
    #[arg(
        long,
        global = true,
        env = "CHARTDIFF_REGISTRY",
        default_value = "https://artifacthub.io"
    )]
    registry: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List a version's template files
    Templates {
        /// Package identifier in the registry
        package_id: String,

        /// Package version
        version: String,

        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare template files between two versions
    Compare {
        /// Package identifier in the registry
        package_id: String,

        /// Version being viewed
        version: String,

        /// Version to compare against
        #[arg(long = "to")]
        to: String,

        /// Context lines around changes
        #[arg(long, default_value_t = 2, conflicts_with = "expanded")]
        context: usize,

        /// Show whole files instead of context windows
        #[arg(long)]
        expanded: bool,

        /// Filter templates by name or resource kind
        #[arg(long)]
        filter: Option<String>,

        /// Show only the named template (default: all matching templates)
        #[arg(long)]
        template: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = cli.registry;

    match cli.command {
        Commands::Templates {
            package_id,
            version,
            json,
        } => commands::templates::run(&registry, &package_id, &version, json).await,

        Commands::Compare {
            package_id,
            version,
            to,
            context,
            expanded,
            filter,
            template,
        } => {
            commands::compare::run(
                &registry,
                &package_id,
                &version,
                &to,
                context,
                expanded,
                filter.as_deref(),
                template.as_deref(),
            )
            .await
        }
    }
}
