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

use common::EXTRA_LIFE_PRICE;

/// Summary of a finished run. The coins line appears once the backend has
/// answered the report for this run.
#[derive(Debug)]
pub struct GameOverState {
    run_id: u64,
    score: u32,
    high_score: u32,
    new_record: bool,
    coins_earned: Option<u32>,
}

impl GameOverState {
    pub fn new(run_id: u64, score: u32, high_score: u32, new_record: bool) -> Self {
        Self {
            run_id,
            score,
            high_score,
            new_record,
            coins_earned: None,
        }
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn coins_earned(&self) -> Option<u32> {
        self.coins_earned
    }

    pub fn set_coins_earned(&mut self, coins: u32) {
        self.coins_earned = Some(coins);
    }
}

impl View for GameOverState {
    fn handle_input(&mut self, key: KeyEvent, _ctx: &mut AppContext) -> Option<AppCommand> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => Some(AppCommand::StartGame { initial_lives: None }),
            KeyCode::Char('b') => Some(AppCommand::BuyExtraLife),
            KeyCode::Char('s') => Some(AppCommand::OpenStore),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(AppCommand::Quit),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::ShowMenu),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled("GAME OVER", bold.fg(Color::Red))),
            Line::from(""),
            Line::from(vec![Span::raw("Score: "), Span::styled(self.score.to_string(), bold.fg(Color::Yellow))]),
            Line::from(format!("High score: {}", self.high_score)),
        ];
        if self.new_record {
            lines.push(Line::from(Span::styled("New high score!", bold.fg(Color::Green))));
        }
        if let Some(coins) = self.coins_earned {
            lines.push(Line::from(Span::styled(
                format!("+{} coins", coins),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
        if ctx.can_buy_extra_life() {
            lines.push(Line::from(Span::styled(
                format!("b: Buy extra life ({} coins)", EXTRA_LIFE_PRICE),
                Style::default().fg(Color::Cyan),
            )));
        }
        if ctx.engine.state().bonus_lives > 0 {
            lines.push(Line::from(format!(
                "Next run starts with {} extra lives",
                ctx.engine.state().bonus_lives
            )));
        }
        lines.push(Line::from(Span::styled(
            "Enter/r: Play again | s: Store | q: Menu",
            Style::default().fg(Color::DarkGray),
        )));

        let area = centered_rect(48, lines.len() as u16 + 2, frame.area());
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}
