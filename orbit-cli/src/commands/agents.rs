use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use orbit_core::Catalog;

use super::{color_cell, is_json};
use crate::config::CliConfig;

pub async fn handle_agents_command(config: &CliConfig, format: &str) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    cmd_agents_list(&catalog, format)
}

fn appearances(catalog: &Catalog, agent_id: &str) -> usize {
    catalog
        .scenarios()
        .iter()
        .filter(|s| s.participants().contains(&agent_id))
        .count()
}

fn cmd_agents_list(catalog: &Catalog, format: &str) -> anyhow::Result<()> {
    if is_json(format) {
        let output: Vec<serde_json::Value> = catalog
            .agents()
            .iter()
            .map(|agent| {
                serde_json::json!({
                    "id": agent.id,
                    "label": agent.label,
                    "role": agent.role,
                    "color": agent.color.to_string(),
                    "scenarios": appearances(catalog, &agent.id),
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Agent Catalog".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::White),
            Cell::new("Agent").fg(Color::White),
            Cell::new("Role").fg(Color::White),
            Cell::new("Color").fg(Color::White),
            Cell::new("Scenarios").fg(Color::White),
        ]);

    for agent in catalog.agents() {
        let used_in = appearances(catalog, &agent.id);
        let used_cell = if used_in == 0 {
            Cell::new("-").fg(Color::DarkGrey)
        } else {
            Cell::new(used_in)
        };

        table.add_row(vec![
            Cell::new(&agent.id),
            color_cell(format!("● {}", agent.label), agent.color),
            Cell::new(&agent.role),
            Cell::new(agent.color.to_string()).fg(Color::DarkGrey),
            used_cell,
        ]);
    }

    println!("{table}");
    println!();
    println!("  Total: {} agents", catalog.agents().len());

    Ok(())
}
