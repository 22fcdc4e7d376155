use super::{centered_rect, View};
use crate::app::{AppCommand, AppContext};
use crate::input::GameKey;
use crate::render::arena::ArenaRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;
use tracing::{debug, info};

use common::GameEvent;

#[derive(Debug, Default)]
pub struct GameViewState;

impl GameViewState {
    pub fn new() -> Self {
        Self
    }

    fn render_hud(&self, ctx: &AppContext) -> Paragraph<'static> {
        let state = ctx.engine.state();
        let value = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::raw("Score: "),
            Span::styled(state.score.to_string(), value),
            Span::raw(" | Lives: "),
            Span::styled(state.lives.to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" | High: "),
            Span::styled(ctx.engine.high_score().max(state.score).to_string(), value),
        ];
        if state.paused {
            spans.push(Span::styled(" | ⏸ Paused", Style::default().fg(Color::Cyan)));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
    }

    fn render_arena(&self, frame: &mut Frame, area: Rect, ctx: &AppContext) {
        let grid_cells = ctx.engine.config().grid_cells;

        // 2x1 characters per cell keeps the board roughly square
        let char_dims = CharDimensions::new(2, 1);
        let skin = ctx.profile.wardrobe().equipped_skin();
        let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims, skin));
        let config = RenderConfig { chars_per_point: char_dims };
        let char_grid = arena_renderer.render(ctx.engine.state(), grid_cells, &config);

        let inner_width = grid_cells as usize * char_dims.horizontal;
        let arena_width = inner_width + 2;
        let arena_height = grid_cells as usize * char_dims.vertical + 2;
        let x_offset = area.width.saturating_sub(arena_width as u16) / 2;
        let y_offset = area.height.saturating_sub(arena_height as u16) / 2;
        let border = Style::default().fg(Color::DarkGray);

        let mut final_lines: Vec<Line> = Vec::new();
        for _ in 0..y_offset {
            final_lines.push(Line::from(""));
        }

        let padding = " ".repeat(x_offset as usize);
        final_lines.push(Line::from(Span::styled(
            format!("{}┌{}┐", padding, "─".repeat(inner_width)),
            border,
        )));
        for (chars, styles) in char_grid.into_styled_lines() {
            let mut line_spans = Vec::with_capacity(chars.len() + 3);
            if x_offset > 0 {
                line_spans.push(Span::raw(padding.clone()));
            }
            line_spans.push(Span::styled("│", border));
            for (ch, style) in chars.into_iter().zip(styles) {
                line_spans.push(Span::styled(ch.to_string(), style));
            }
            line_spans.push(Span::styled("│", border));
            final_lines.push(Line::from(line_spans));
        }
        final_lines.push(Line::from(Span::styled(
            format!("{}└{}┘", padding, "─".repeat(inner_width)),
            border,
        )));

        frame.render_widget(Paragraph::new(final_lines), area);
    }
}

impl View for GameViewState {
    fn handle_input(&mut self, key: KeyEvent, ctx: &mut AppContext) -> Option<AppCommand> {
        match GameKey::from_key_event(key) {
            GameKey::Steer(direction) => {
                if !ctx.engine.request_direction(direction) {
                    debug!("Ignored turn to {:?}", direction);
                }
                None
            }
            GameKey::TogglePause => {
                ctx.engine.toggle_pause();
                None
            }
            GameKey::Quit => Some(AppCommand::ShowMenu),
            GameKey::None => None,
        }
    }

    fn update(&mut self, dt: Duration, ctx: &mut AppContext) -> Option<AppCommand> {
        let mut command = None;
        for event in ctx.engine.advance(dt) {
            match event {
                GameEvent::LifeLost { cause, lives_remaining, bonus_consumed } => {
                    debug!(
                        "Life lost to {:?}, {} left (bonus consumed: {})",
                        cause, lives_remaining, bonus_consumed
                    );
                }
                GameEvent::GameOver { score, high_score, new_record } => {
                    info!("Game over with score {} (high score {})", score, high_score);
                    command = Some(AppCommand::GameOver { score, high_score, new_record });
                }
                _ => {}
            }
        }
        command
    }

    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        frame.render_widget(self.render_hud(ctx), chunks[0]);
        self.render_arena(frame, chunks[1], ctx);
        frame.render_widget(
            Paragraph::new("Arrows/WASD: Steer | Space: Pause | q: Menu")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            chunks[2],
        );

        if ctx.engine.state().paused {
            let overlay = centered_rect(22, 3, chunks[1]);
            frame.render_widget(Clear, overlay);
            frame.render_widget(
                Paragraph::new("PAUSED")
                    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                overlay,
            );
        }
    }
}
