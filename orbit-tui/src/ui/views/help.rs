use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpView;

impl HelpView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_keys_help(frame, chunks[0], app);
        Self::render_views_help(frame, chunks[1], app);
    }

    fn render_keys_help(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let keybinds = [
            ("Tab / Shift+Tab", "Next / previous view"),
            ("1-3", "Jump to view by number"),
            ("Space / Enter", "Run (resume, or restart when complete)"),
            ("p", "Pause"),
            ("r", "Reset to the first step"),
            ("[ / ]", "Previous / next scenario"),
            ("h / l", "Previous / next flow step"),
            ("t", "Toggle light / dark theme"),
            ("?", "Toggle this help"),
            ("Esc", "Leave help, or quit"),
            ("q / Ctrl+C", "Quit"),
        ];

        let lines: Vec<Line> = keybinds
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<17}", key),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.foreground())),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }

    fn render_views_help(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Views ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let views = [
            (
                "1. Network",
                "Agents orbiting and collaborating around the Orchestrator",
            ),
            (
                "2. Flow",
                "From prompt to delivery in six steps",
            ),
            (
                "3. Simulation",
                "Watch the orchestrator assign and collect work in real-time",
            ),
        ];

        let mut lines: Vec<Line> = views
            .iter()
            .flat_map(|(title, desc)| {
                vec![
                    Line::from(Span::styled(
                        format!("  {}", title),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("    {}", desc),
                        Style::default().fg(theme.foreground_dim()),
                    )),
                    Line::from(""),
                ]
            })
            .collect();

        let catalog = app.catalog();
        lines.push(Line::from(Span::styled(
            format!(
                "  {} agents, {} scenarios loaded",
                catalog.agents().len(),
                catalog.scenarios().len()
            ),
            Style::default().fg(theme.foreground_dim()),
        )));

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }
}
