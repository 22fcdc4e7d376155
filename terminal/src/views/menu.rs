use super::{centered_rect, View};
use crate::app::{AppCommand, AppContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct MenuState;

impl MenuState {
    pub fn new() -> Self {
        Self
    }
}

impl View for MenuState {
    fn handle_input(&mut self, key: KeyEvent, _ctx: &mut AppContext) -> Option<AppCommand> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppCommand::StartGame { initial_lives: None }),
            KeyCode::Char('s') => Some(AppCommand::OpenStore),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppCommand::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let skin = ctx.profile.wardrobe().equipped_skin();
        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled(
                "S N A K E",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("High score  ", label),
                Span::styled(ctx.engine.high_score().to_string(), value),
            ]),
        ];
        if ctx.online {
            lines.push(Line::from(vec![
                Span::styled("Coins       ", label),
                Span::styled(ctx.profile.balance.to_string(), value),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Extra lives ", label),
                Span::styled(ctx.engine.state().bonus_lives.to_string(), value),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Skin        ", label),
            Span::styled(skin.name, Style::default().fg(crate::render::tui_color(skin.head))),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter: Play | s: Store | q: Quit",
            Style::default().fg(Color::DarkGray),
        )));
        if !ctx.online {
            lines.push(Line::from(Span::styled("offline mode", Style::default().fg(Color::Red))));
        }

        let area = centered_rect(44, lines.len() as u16 + 2, frame.area());
        let menu = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(menu, area);
    }
}
