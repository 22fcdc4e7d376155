use common::render::{gradient_color, BACKGROUND, FOOD};
use common::{Direction, Skin};
use ratatui::style::{Modifier, Style};

use super::tui_color;
use super::traits::GameObjectRenderer;
use super::types::{CharDimensions, CharPattern};

/// Draws the session with block characters coloured after the equipped skin.
pub struct StandardRenderer {
    char_dims: CharDimensions,
    skin: &'static Skin,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions, skin: &'static Skin) -> Self {
        Self { char_dims, skin }
    }

    fn base_style(&self) -> Style {
        Style::default().bg(tui_color(BACKGROUND))
    }

    fn head_chars(&self, direction: Option<Direction>) -> Vec<Vec<char>> {
        let arrow = match direction {
            Some(Direction::Up) => '▲',
            Some(Direction::Down) => '▼',
            Some(Direction::Left) => '◀',
            Some(Direction::Right) => '▶',
            None => '█',
        };

        if self.char_dims.horizontal == 2 && self.char_dims.vertical == 1 {
            // The arrow sits on the side the snake is heading to
            match direction {
                Some(Direction::Left) => vec![vec![arrow, '█']],
                Some(Direction::Right) => vec![vec!['█', arrow]],
                _ => vec![vec![arrow, arrow]],
            }
        } else if self.char_dims.horizontal == 1 && self.char_dims.vertical == 1 {
            vec![vec![arrow]]
        } else {
            let mut chars = vec![vec!['█'; self.char_dims.horizontal]; self.char_dims.vertical];
            chars[self.char_dims.vertical / 2][self.char_dims.horizontal / 2] = arrow;
            chars
        }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn render_snake_segment(
        &self,
        direction: Option<Direction>,
        index: usize,
        len: usize,
    ) -> CharPattern {
        let is_head = index == 0;
        let color = if self.skin.gradient {
            gradient_color(index, len)
        } else if is_head {
            self.skin.head
        } else {
            self.skin.body
        };
        let style = self.base_style().fg(tui_color(color));

        if is_head {
            return CharPattern::new(self.head_chars(direction), style.add_modifier(Modifier::BOLD));
        }
        CharPattern::single('▓', self.char_dims, style)
    }

    fn render_food(&self) -> CharPattern {
        let style = self.base_style().fg(tui_color(FOOD));
        let chars = if self.char_dims.horizontal <= 2 && self.char_dims.vertical == 1 {
            vec![vec!['●'; self.char_dims.horizontal]]
        } else {
            // For larger dimensions, create a pattern with food char in center-ish positions
            let mut pattern = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
            for (y, row) in pattern.iter_mut().enumerate() {
                for (x, cell) in row.iter_mut().enumerate() {
                    if (x + y) % 2 == 0 {
                        *cell = '●';
                    }
                }
            }
            pattern
        };

        CharPattern::new(chars, style)
    }

    fn render_empty(&self) -> CharPattern {
        CharPattern::single(' ', self.char_dims, self.base_style())
    }
}
