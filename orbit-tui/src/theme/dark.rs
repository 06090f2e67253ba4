use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

pub struct OrbitDark;

impl Theme for OrbitDark {
    fn name(&self) -> &'static str {
        "Orbit Dark"
    }

    fn background(&self) -> Color {
        hex_to_color(0x020617)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0xf1f5f9)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x94a3b8)
    }

    fn surface(&self) -> Color {
        hex_to_color(0x0f172a)
    }

    fn border(&self) -> Color {
        hex_to_color(0x1e293b)
    }

    fn selection(&self) -> Color {
        hex_to_color(0x312e81)
    }

    fn accent(&self) -> Color {
        hex_to_color(0xa78bfa)
    }

    fn accent_secondary(&self) -> Color {
        hex_to_color(0x38bdf8)
    }

    fn success(&self) -> Color {
        hex_to_color(0x34d399)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xfbbf24)
    }

    fn error(&self) -> Color {
        hex_to_color(0xf87171)
    }

    fn info(&self) -> Color {
        hex_to_color(0x22d3ee)
    }
}
