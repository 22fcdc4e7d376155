use common::Direction;
use super::types::CharPattern;

pub trait GameObjectRenderer {
    /// `index` counts from the head; `len` is the whole snake.
    fn render_snake_segment(
        &self,
        direction: Option<Direction>,
        index: usize,
        len: usize,
    ) -> CharPattern;

    fn render_food(&self) -> CharPattern;

    fn render_empty(&self) -> CharPattern;
}
