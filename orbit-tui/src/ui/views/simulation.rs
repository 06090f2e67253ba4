use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use orbit_core::{Catalog, LogEntry, PlaybackPhase, PlaybackSnapshot};

use crate::app::App;
use crate::theme::{agent_color, Theme};

/// Agents shown as cards; the rest only appear in the log.
const CARD_COUNT: usize = 6;
const CARDS_PER_ROW: usize = 3;

pub struct SimulationView;

impl SimulationView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let snapshot = app.snapshot();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(8)])
            .split(area);

        Self::render_transport(frame, chunks[0], app, &snapshot);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(4)])
            .split(body[0]);

        Self::render_agent_cards(frame, left[0], app, &snapshot);
        Self::render_handoff_log(frame, left[1], app, &snapshot);
        Self::render_message_stream(frame, body[1], app, &snapshot);
    }

    fn render_transport(frame: &mut Frame, area: Rect, app: &App, snapshot: &PlaybackSnapshot) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Agent Orchestration ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Watch the orchestrator assign and collect work in real-time.",
                Style::default().fg(theme.foreground_dim()),
            )),
            rows[0],
        );

        let scenarios: Vec<Span> = app
            .catalog()
            .scenarios()
            .iter()
            .flat_map(|scenario| {
                let style = if scenario.id == snapshot.scenario_id {
                    Style::default()
                        .fg(theme.background())
                        .bg(theme.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground_dim())
                };
                vec![
                    Span::raw(" "),
                    Span::styled(format!(" {} ", scenario.id), style),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(scenarios)), rows[1]);

        let status = Line::from(vec![
            Span::styled(
                format!(" {} ", snapshot.scenario_label),
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", snapshot.phase.label()),
                Style::default().fg(phase_color(theme, snapshot.phase)),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), rows[2]);

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.accent())
                    .bg(theme.border()),
            )
            .ratio(snapshot.progress().clamp(0.0, 1.0))
            .label(format!("{}/{}", snapshot.cursor, snapshot.total));
        frame.render_widget(gauge, rows[3]);
    }

    fn render_agent_cards(frame: &mut Frame, area: Rect, app: &App, snapshot: &PlaybackSnapshot) {
        let theme = app.current_theme();
        let agents = app.catalog().agents();
        let shown = &agents[..agents.len().min(CARD_COUNT)];

        let active: Vec<&str> = snapshot
            .latest()
            .map(|entry| vec![entry.event.from.as_str(), entry.event.to.as_str()])
            .unwrap_or_default();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area);

        for (row_index, row_agents) in shown.chunks(CARDS_PER_ROW).enumerate() {
            let Some(row_area) = rows.get(row_index) else {
                break;
            };
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, CARDS_PER_ROW as u32);
                    CARDS_PER_ROW
                ])
                .split(*row_area);

            for (agent, card_area) in row_agents.iter().zip(columns.iter()) {
                let highlighted = active.contains(&agent.id.as_str());
                let border = if highlighted {
                    theme.accent()
                } else {
                    theme.border()
                };
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .style(Style::default().bg(theme.surface()));

                let dot = Style::default().fg(agent_color(agent.color));
                let lines = vec![
                    Line::from(vec![
                        Span::styled("● ", dot),
                        Span::styled(
                            agent.label.clone(),
                            Style::default()
                                .fg(theme.foreground())
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            "Agent",
                            Style::default()
                                .fg(theme.accent_secondary())
                                .add_modifier(Modifier::DIM),
                        ),
                    ]),
                    Line::from(Span::styled(
                        agent.role.clone(),
                        Style::default().fg(theme.foreground_dim()),
                    )),
                ];

                frame.render_widget(Paragraph::new(lines).block(block), *card_area);
            }
        }
    }

    fn render_handoff_log(frame: &mut Frame, area: Rect, app: &App, snapshot: &PlaybackSnapshot) {
        let theme = app.current_theme();
        let catalog = app.catalog();

        let block = Block::default()
            .title(" Hand-offs ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Newest entries stay visible when the log outgrows the panel.
        let skip = snapshot.log.len().saturating_sub(inner.height as usize);
        let lines: Vec<Line> = snapshot
            .log
            .iter()
            .skip(skip)
            .map(|entry| {
                let mut spans = route_spans(theme, catalog, entry);
                spans.push(Span::styled(
                    format!(" · {}", entry.event.note),
                    Style::default().fg(theme.foreground_dim()),
                ));
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_message_stream(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        snapshot: &PlaybackSnapshot,
    ) {
        let theme = app.current_theme();
        let catalog = app.catalog();

        let block = Block::default()
            .title(" Message Stream ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Outputs and feedback shared between agents.",
                Style::default().fg(theme.foreground_dim()),
            )),
            Line::from(""),
        ];

        if snapshot.log.is_empty() {
            lines.push(Line::from(Span::styled(
                "No messages yet. Press Run to start the simulation.",
                Style::default()
                    .fg(theme.foreground_dim())
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for entry in &snapshot.log {
                lines.push(Line::from(Span::styled(
                    format!("Step {}", entry.step),
                    Style::default().fg(theme.info()),
                )));
                let mut spans = route_spans(theme, catalog, entry);
                spans.push(Span::styled(
                    format!(" {}", entry.event.note),
                    Style::default().fg(theme.foreground()),
                ));
                lines.push(Line::from(spans));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

fn phase_color(theme: &dyn Theme, phase: PlaybackPhase) -> ratatui::style::Color {
    match phase {
        PlaybackPhase::Idle => theme.foreground_dim(),
        PlaybackPhase::Running => theme.success(),
        PlaybackPhase::Paused => theme.warning(),
        PlaybackPhase::Completed => theme.info(),
    }
}

/// "From → To" with each name in its agent color.
fn route_spans(theme: &dyn Theme, catalog: &Catalog, entry: &LogEntry) -> Vec<Span<'static>> {
    let name = |id: &str| {
        catalog
            .agent(id)
            .map(|a| (a.label.clone(), agent_color(a.color)))
            .unwrap_or_else(|| (id.to_string(), theme.foreground()))
    };
    let (from, from_color) = name(&entry.event.from);
    let (to, to_color) = name(&entry.event.to);

    vec![
        Span::styled(
            from,
            Style::default().fg(from_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" → ", Style::default().fg(theme.foreground_dim())),
        Span::styled(to, Style::default().fg(to_color).add_modifier(Modifier::BOLD)),
    ]
}
