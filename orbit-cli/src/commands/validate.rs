use colored::Colorize;
use orbit_core::Catalog;
use std::path::PathBuf;
use tracing::info;

use crate::config::CliConfig;

pub async fn handle_validate_command(
    config: &CliConfig,
    path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let path = path.or_else(|| config.catalog_path().map(PathBuf::from));

    let catalog = match &path {
        Some(path) => {
            println!(
                "{} {}",
                "Validating".cyan().bold(),
                path.display().to_string().bold()
            );
            Catalog::load_from_file(path)?
        }
        None => {
            println!(
                "{} {}",
                "Validating".cyan().bold(),
                "built-in catalog".bold()
            );
            Catalog::builtin()?
        }
    };
    info!(scenarios = catalog.scenarios().len(), "Catalog validated");

    println!();
    for scenario in catalog.scenarios() {
        println!(
            "  {} {:<20} {:>2} steps  {}",
            "✓".green(),
            scenario.id,
            scenario.len(),
            scenario.label.dimmed()
        );
    }
    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!(
            "Catalog is valid: {} agents, {} scenarios",
            catalog.agents().len(),
            catalog.scenarios().len()
        )
        .green()
    );

    Ok(())
}
