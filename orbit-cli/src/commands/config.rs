use colored::Colorize;
use orbit_core::get_config_dir;

use super::is_json;
use crate::config::CliConfig;

pub async fn handle_config_command(config: &CliConfig, format: &str) -> anyhow::Result<()> {
    if is_json(format) {
        println!("{}", serde_json::to_string_pretty(&config.core)?);
        return Ok(());
    }

    println!("{}", "Effective Configuration".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    if let Some(dir) = get_config_dir() {
        println!(
            "  {:<15} {}",
            "Config dir:".bold(),
            dir.join("config.toml").display()
        );
    }
    match config.catalog_path() {
        Some(path) => println!("  {:<15} {}", "Catalog:".bold(), path.display()),
        None => println!("  {:<15} built-in", "Catalog:".bold()),
    }
    println!();
    print!("{}", toml::to_string_pretty(&config.core)?);

    Ok(())
}
