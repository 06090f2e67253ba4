use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use orbit_core::FLOW_STEPS;

use crate::app::App;
use crate::events::Action;
use crate::ui::layout::Regions;

pub struct FlowView;

impl FlowView {
    /// Returns the step boxes as click targets.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Regions {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(area);

        let regions = Self::render_steps(frame, chunks[0], app);
        Self::render_detail(frame, chunks[1], app);
        regions
    }

    fn render_steps(frame: &mut Frame, area: Rect, app: &App) -> Regions {
        let theme = app.current_theme();
        let active = app.flow.active();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, FLOW_STEPS.len() as u32); FLOW_STEPS.len()])
            .split(area);

        let mut regions = Regions::new();

        for (step, column) in FLOW_STEPS.iter().zip(columns.iter()) {
            let is_active = step.number == active;
            let (border_style, bg, border_type) = if is_active {
                (
                    Style::default().fg(theme.accent()),
                    theme.selection(),
                    BorderType::Thick,
                )
            } else {
                (
                    Style::default().fg(theme.border()),
                    theme.surface(),
                    BorderType::Rounded,
                )
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style)
                .style(Style::default().bg(bg));

            let title_style = if is_active {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD)
            };

            let lines = vec![
                Line::from(Span::styled(
                    format!("{}", step.number),
                    Style::default().fg(theme.accent_secondary()),
                )),
                Line::from(Span::styled(step.title, title_style)),
                Line::from(""),
                Line::from(Span::styled(
                    step.description,
                    Style::default().fg(theme.foreground_dim()),
                )),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, *column);

            regions.push((*column, Action::SelectStep(step.number)));
        }

        regions
    }

    fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let step = app.flow.active_step();

        let block = Block::default()
            .title(format!(" Step {} · {} ", step.number, step.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", step.detail),
                Style::default().fg(theme.foreground()),
            )),
            Line::from(""),
        ];

        // Breadcrumb of the whole pipeline with the active step emphasised.
        let mut crumbs = vec![Span::raw("  ")];
        for (i, other) in FLOW_STEPS.iter().enumerate() {
            if i > 0 {
                crumbs.push(Span::styled(" → ", Style::default().fg(theme.foreground_dim())));
            }
            let style = if other.number == step.number {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.foreground_dim())
            };
            crumbs.push(Span::styled(other.title, style));
        }
        lines.push(Line::from(crumbs));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  h/l or ←/→ to move between steps",
            Style::default().fg(theme.foreground_dim()),
        )));

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.surface()))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
