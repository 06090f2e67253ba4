use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::events::Action;
use crate::theme::Theme;
use crate::ui::layout::Regions;

pub struct Footer;

impl Footer {
    /// Draws transport buttons, key hints and the status line. Returns the
    /// button areas so clicks can be routed.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Regions {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let buttons = [
            (" ▶ Run ", Action::Run, app.can_run()),
            (" ❚❚ Pause ", Action::Pause, !app.can_run()),
            (" ↺ Reset ", Action::Reset, true),
        ];

        let mut spans = Vec::new();
        let mut regions = Regions::new();
        let mut x = chunks[0].x;

        for (label, action, enabled) in buttons {
            let span = Span::styled(label, button_style(theme, enabled));
            let width = span.width() as u16;
            if enabled {
                regions.push((Rect::new(x, chunks[0].y, width, 1), action));
            }
            x += width + 1;
            spans.push(span);
            spans.push(Span::raw(" "));
        }

        let keybinds = [
            ("[ ]", "Scenario"),
            ("h/l", "Step"),
            ("t", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ];

        spans.extend(keybinds.iter().flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" {key}"),
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(":{desc} "),
                    Style::default().fg(theme.foreground_dim()),
                ),
            ]
        }));

        let keybinds_widget = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(keybinds_widget, chunks[0]);

        let status = app.status_message.as_deref().unwrap_or("Ready");
        let status_widget = Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(status_widget, chunks[1]);

        regions
    }
}

fn button_style(theme: &dyn Theme, enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(theme.background())
            .bg(theme.accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.foreground_dim())
            .bg(theme.border())
            .add_modifier(Modifier::DIM)
    }
}
