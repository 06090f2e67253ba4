use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20),
                Constraint::Min(20),
                Constraint::Length(30),
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("◎ ", Style::default().fg(theme.accent())),
            Span::styled(
                "Orbit ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", orbit_core::VERSION),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(logo, chunks[0]);

        let tab_titles: Vec<Line> = View::all()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let style = if *v == app.current_view {
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground_dim())
                };
                Line::from(Span::styled(format!("{} {}", i + 1, v.name()), style))
            })
            .collect();

        let tabs = Tabs::new(tab_titles)
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.background()))
            .highlight_style(Style::default().fg(theme.accent()))
            .select(
                View::all()
                    .iter()
                    .position(|v| *v == app.current_view)
                    .unwrap_or(0),
            )
            .divider(Span::raw(" │ "));
        frame.render_widget(tabs, chunks[1]);

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let right = Paragraph::new(Line::from(vec![
            Span::styled(
                app.theme_manager.current_theme_name(),
                Style::default().fg(theme.foreground_dim()),
            ),
            Span::raw("  "),
            Span::styled(time, Style::default().fg(theme.foreground_dim())),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(right, chunks[2]);
    }
}
