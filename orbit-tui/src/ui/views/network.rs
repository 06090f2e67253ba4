use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use orbit_core::showcase::{slot_radius, MAX_RADIUS};
use orbit_core::{orbit_layout, orbit_phase};

use crate::app::App;
use crate::theme::agent_color;
use crate::ui::layout::MainLayout;

/// Slowest ring turns once a minute; each later agent is a little slower.
const BASE_PERIOD_MS: u64 = 60_000;
const PERIOD_STEP_MS: u64 = 3_000;

const Y_BOUND: f64 = 1.25;

pub struct NetworkView;

impl NetworkView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = MainLayout::create_two_column_layout(area, 70);

        Self::render_orbit(frame, chunks[0], app);
        Self::render_legend(frame, chunks[1], app);
    }

    fn render_orbit(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Network ")
            .title_bottom(
                Line::from(" Agents orbiting and collaborating around the Orchestrator ")
                    .alignment(Alignment::Center),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);

        let catalog = app.catalog();
        let millis = app.animation_millis();
        let positions: Vec<(f64, f64)> = orbit_layout(catalog.agents())
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                let period = BASE_PERIOD_MS + i as u64 * PERIOD_STEP_MS;
                slot.normalized(orbit_phase(millis, period))
            })
            .collect();

        let snapshot = app.snapshot();
        let latest = snapshot.latest().map(|entry| {
            let index_of = |id: &str| catalog.agents().iter().position(|a| a.id == id);
            (index_of(&entry.event.from), index_of(&entry.event.to))
        });

        // Terminal cells are roughly twice as tall as wide.
        let x_bound = if inner.height == 0 {
            Y_BOUND
        } else {
            Y_BOUND * f64::from(inner.width) / (2.0 * f64::from(inner.height))
        };

        let ring_color = theme.border();
        let link_color = theme.accent();
        let center_style = Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(theme.surface())
            .x_bounds([-x_bound, x_bound])
            .y_bounds([-Y_BOUND, Y_BOUND])
            .paint(|ctx| {
                for ring in 0..3 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: slot_radius(ring) / MAX_RADIUS,
                        color: ring_color,
                    });
                }

                if let Some((Some(from), Some(to))) = latest {
                    let (x1, y1) = positions[from];
                    let (x2, y2) = positions[to];
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: link_color,
                    });
                }

                ctx.layer();

                for (agent, (x, y)) in catalog.agents().iter().zip(&positions) {
                    let style = Style::default()
                        .fg(agent_color(agent.color))
                        .add_modifier(Modifier::BOLD);
                    let label = Span::styled(format!("● {}", agent.label), style);
                    ctx.print(*x, *y, Line::from(label));
                }

                ctx.print(
                    -0.2,
                    0.0,
                    Line::from(Span::styled("Orchestrator", center_style)),
                );
            });

        frame.render_widget(canvas, area);
    }

    fn render_legend(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let block = Block::default()
            .title(" Agents ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let snapshot = app.snapshot();
        let active: Vec<&str> = snapshot
            .latest()
            .map(|entry| vec![entry.event.from.as_str(), entry.event.to.as_str()])
            .unwrap_or_default();

        let mut lines: Vec<Line> = app
            .catalog()
            .agents()
            .iter()
            .flat_map(|agent| {
                let name_style = if active.contains(&agent.id.as_str()) {
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground())
                };
                vec![
                    Line::from(vec![
                        Span::styled(" ● ", Style::default().fg(agent_color(agent.color))),
                        Span::styled(agent.label.clone(), name_style),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", agent.role),
                        Style::default().fg(theme.foreground_dim()),
                    )),
                ]
            })
            .collect();

        if let Some(entry) = snapshot.latest() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" Step {}: {}", entry.step, entry.event.note),
                Style::default().fg(theme.info()),
            )));
        }

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }
}
