use clap::Subcommand;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use orbit_core::{Catalog, OrbitError, Scenario};

use super::{color_cell, is_json};
use crate::config::CliConfig;

#[derive(Subcommand)]
pub enum ScenariosCommand {
    #[command(about = "List scenarios in catalog order")]
    List {
        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show every hand-off of one scenario")]
    Show {
        #[arg(help = "Scenario id")]
        id: String,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },
}

pub async fn handle_scenarios_command(
    config: &CliConfig,
    cmd: Option<ScenariosCommand>,
) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;

    match cmd.unwrap_or(ScenariosCommand::List {
        format: "text".to_string(),
    }) {
        ScenariosCommand::List { format } => cmd_scenarios_list(&catalog, &format),
        ScenariosCommand::Show { id, format } => cmd_scenarios_show(&catalog, &id, &format),
    }
}

fn cmd_scenarios_list(catalog: &Catalog, format: &str) -> anyhow::Result<()> {
    if is_json(format) {
        let output: Vec<serde_json::Value> = catalog
            .scenarios()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "id": s.id,
                    "label": s.label,
                    "steps": s.len(),
                    "agents": s.participants(),
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Scenarios".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Id").fg(Color::White),
            Cell::new("Goal").fg(Color::White),
            Cell::new("Steps").fg(Color::White),
            Cell::new("Agents").fg(Color::White),
        ]);

    for scenario in catalog.scenarios() {
        table.add_row(vec![
            Cell::new(&scenario.id).fg(Color::Cyan),
            Cell::new(&scenario.label),
            Cell::new(scenario.len()),
            Cell::new(scenario.participants().join(", ")),
        ]);
    }

    println!("{table}");
    println!();
    println!("  Total: {} scenarios", catalog.scenarios().len());
    println!(
        "{}",
        "Run 'orbit play <id>' to watch a scenario unfold.".dimmed()
    );

    Ok(())
}

fn cmd_scenarios_show(catalog: &Catalog, id: &str, format: &str) -> anyhow::Result<()> {
    let scenario = catalog
        .scenario(id)
        .ok_or_else(|| OrbitError::UnknownScenario(id.to_string()))?;

    if is_json(format) {
        println!("{}", serde_json::to_string_pretty(scenario)?);
        return Ok(());
    }

    println!(
        "{} {}",
        scenario.id.cyan().bold(),
        format!("- {}", scenario.label).bold()
    );
    println!();
    println!("{}", steps_table(catalog, scenario));

    Ok(())
}

fn steps_table(catalog: &Catalog, scenario: &Scenario) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("#").fg(Color::White),
            Cell::new("From").fg(Color::White),
            Cell::new("To").fg(Color::White),
            Cell::new("Note").fg(Color::White),
        ]);

    let agent_cell = |id: &str| match catalog.agent(id) {
        Some(agent) => color_cell(&agent.label, agent.color),
        None => Cell::new(id),
    };

    for (i, step) in scenario.steps.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            agent_cell(&step.from),
            agent_cell(&step.to),
            Cell::new(&step.note),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_unknown_scenario_is_orbit_error() {
        let catalog = Catalog::builtin().unwrap();
        let err = cmd_scenarios_show(&catalog, "moon-base", "text").unwrap_err();
        let orbit = err.downcast_ref::<OrbitError>().unwrap();
        assert_eq!(orbit.error_code(), "E3001");
    }

    #[test]
    fn test_steps_table_has_one_row_per_step() {
        let catalog = Catalog::builtin().unwrap();
        let scenario = catalog.scenario("travel-site").unwrap();
        let rendered = steps_table(&catalog, scenario).to_string();
        assert!(rendered.contains("Design hero + search UI"));
        assert!(rendered.contains("Report & auto-fix"));
        assert_eq!(steps_table(&catalog, scenario).row_iter().count(), 6);
    }
}
