pub mod agents;
pub mod config;
pub mod play;
pub mod scenarios;
pub mod validate;

pub use agents::handle_agents_command;
pub use config::handle_config_command;
pub use play::handle_play_command;
pub use scenarios::{handle_scenarios_command, ScenariosCommand};
pub use validate::handle_validate_command;

use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Color};
use orbit_core::{AgentColor, Catalog};

pub(crate) fn paint(text: &str, color: AgentColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b)
}

pub(crate) fn color_cell(text: impl Into<String>, color: AgentColor) -> Cell {
    let (r, g, b) = color.rgb();
    Cell::new(text.into()).fg(Color::Rgb { r, g, b })
}

/// Agent label painted in the agent's color, falling back to the raw id.
pub(crate) fn agent_name(catalog: &Catalog, id: &str) -> ColoredString {
    match catalog.agent(id) {
        Some(agent) => paint(&agent.label, agent.color).bold(),
        None => id.normal(),
    }
}

pub(crate) fn is_json(format: &str) -> bool {
    format.eq_ignore_ascii_case("json")
}
