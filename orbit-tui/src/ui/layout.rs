use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, View};
use crate::events::Action;
use crate::ui::views::{FlowView, HelpView, NetworkView, SimulationView};
use crate::ui::widgets::{Footer, Header};

/// Click targets produced while drawing a frame.
pub type Regions = Vec<(Rect, Action)>;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, app: &mut App) {
        let regions = Self::draw(frame, app);

        app.event_handler.clear_clickable_regions();
        for (area, action) in regions {
            app.event_handler.register_clickable_region(area, action);
        }
    }

    fn draw(frame: &mut Frame, app: &App) -> Regions {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(size);

        Header::render(frame, chunks[0], app);

        let content_area = chunks[1].inner(Margin::new(1, 0));

        let mut regions = match app.current_view {
            View::Network => {
                NetworkView::render(frame, content_area, app);
                Vec::new()
            }
            View::Flow => FlowView::render(frame, content_area, app),
            View::Simulation => {
                SimulationView::render(frame, content_area, app);
                Vec::new()
            }
            View::Help => {
                HelpView::render(frame, content_area, app);
                Vec::new()
            }
        };

        regions.extend(Footer::render(frame, chunks[2], app));
        regions
    }

    pub fn create_two_column_layout(area: Rect, left_percent: u16) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(left_percent),
                Constraint::Percentage(100 - left_percent),
            ])
            .split(area)
            .to_vec()
    }
}
