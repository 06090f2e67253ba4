use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    GoToView(usize),
    Back,
    Help,
    ToggleTheme,
    Run,
    Pause,
    Reset,
    NextScenario,
    PrevScenario,
    NextStep,
    PrevStep,
    SelectStep(usize),
    MouseScroll { direction: ScrollDirection },
    Resize { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Screen area that maps a left click to an action, e.g. a transport button.
#[derive(Debug, Clone)]
pub struct ClickableRegion {
    pub area: Rect,
    pub action: Action,
}

impl ClickableRegion {
    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height
    }
}

pub struct EventHandler {
    terminal_size: Option<(u16, u16)>,
    clickable_regions: Vec<ClickableRegion>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            terminal_size: None,
            clickable_regions: Vec::new(),
        }
    }

    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_size
    }

    pub fn register_clickable_region(&mut self, area: Rect, action: Action) {
        self.clickable_regions.push(ClickableRegion { area, action });
    }

    pub fn clear_clickable_regions(&mut self) {
        self.clickable_regions.clear();
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Key(_) => None,
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.handle_resize(width, height),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl_pressed = key.modifiers.contains(KeyModifiers::CONTROL);

        match (key.code, ctrl_pressed) {
            (KeyCode::Char('c'), true) => Some(Action::Quit),
            (KeyCode::Char('q'), false) => Some(Action::Quit),
            (KeyCode::Esc, _) => Some(Action::Back),
            (KeyCode::Tab, _) => Some(Action::NextView),
            (KeyCode::BackTab, _) => Some(Action::PrevView),
            (KeyCode::Char('1'), false) => Some(Action::GoToView(0)),
            (KeyCode::Char('2'), false) => Some(Action::GoToView(1)),
            (KeyCode::Char('3'), false) => Some(Action::GoToView(2)),
            (KeyCode::Char(' '), false) | (KeyCode::Enter, _) => Some(Action::Run),
            (KeyCode::Char('p'), false) => Some(Action::Pause),
            (KeyCode::Char('r'), false) => Some(Action::Reset),
            (KeyCode::Char(']'), false) => Some(Action::NextScenario),
            (KeyCode::Char('['), false) => Some(Action::PrevScenario),
            (KeyCode::Char('l'), false) | (KeyCode::Right, _) => Some(Action::NextStep),
            (KeyCode::Char('h'), false) | (KeyCode::Left, _) => Some(Action::PrevStep),
            (KeyCode::Char('t'), false) => Some(Action::ToggleTheme),
            (KeyCode::Char('?'), false) => Some(Action::Help),
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .clickable_regions
                .iter()
                .find(|region| region.contains(mouse.column, mouse.row))
                .map(|region| region.action.clone()),
            MouseEventKind::ScrollUp => Some(Action::MouseScroll {
                direction: ScrollDirection::Up,
            }),
            MouseEventKind::ScrollDown => Some(Action::MouseScroll {
                direction: ScrollDirection::Down,
            }),
            _ => None,
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.terminal_size = Some((width, height));
        Some(Action::Resize { width, height })
    }
}
