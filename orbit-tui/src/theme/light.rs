use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

pub struct OrbitLight;

impl Theme for OrbitLight {
    fn name(&self) -> &'static str {
        "Orbit Light"
    }

    fn background(&self) -> Color {
        hex_to_color(0xf8fafc)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0x0f172a)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x64748b)
    }

    fn surface(&self) -> Color {
        hex_to_color(0xffffff)
    }

    fn border(&self) -> Color {
        hex_to_color(0xcbd5e1)
    }

    fn selection(&self) -> Color {
        hex_to_color(0xede9fe)
    }

    fn accent(&self) -> Color {
        hex_to_color(0x7c3aed)
    }

    fn accent_secondary(&self) -> Color {
        hex_to_color(0x0284c7)
    }

    fn success(&self) -> Color {
        hex_to_color(0x059669)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xd97706)
    }

    fn error(&self) -> Color {
        hex_to_color(0xdc2626)
    }

    fn info(&self) -> Color {
        hex_to_color(0x0891b2)
    }
}
