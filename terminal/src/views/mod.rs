pub mod game;
pub mod game_over;
pub mod menu;
pub mod store;

pub use game::GameViewState;
pub use game_over::GameOverState;
pub use menu::MenuState;
pub use store::StoreState;

use crate::app::{AppCommand, AppContext};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::time::Duration;

pub trait View {
    fn handle_input(&mut self, key: KeyEvent, ctx: &mut AppContext) -> Option<AppCommand>;
    fn update(&mut self, _dt: Duration, _ctx: &mut AppContext) -> Option<AppCommand> {
        None
    }
    fn render(&self, frame: &mut Frame, ctx: &AppContext);
}

/// A `width` x `height` box centred in `area`, shrunk to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
