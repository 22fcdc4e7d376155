use super::traits::GameObjectRenderer;
use super::types::{CharGrid, RenderConfig};
use common::{Position, SessionState};

pub struct ArenaRenderer<R: GameObjectRenderer> {
    renderer: R,
}

impl<R: GameObjectRenderer> ArenaRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, state: &SessionState, grid_cells: u16, config: &RenderConfig) -> CharGrid {
        let cells = grid_cells as usize;
        let mut grid = CharGrid::filled(cells, cells, config.chars_per_point, &self.renderer.render_empty());
        let visible = |pos: &Position| {
            pos.x >= 0 && pos.x < grid_cells as i16 && pos.y >= 0 && pos.y < grid_cells as i16
        };

        if let Some(food) = state.food.filter(|food| visible(food)) {
            let pattern = self.renderer.render_food();
            grid.set_logical_point(food.x as usize, food.y as usize, &pattern);
        }

        // Tail first so the head ends up on top
        let len = state.snake.len();
        for (i, pos) in state.snake.segments().enumerate().rev() {
            if visible(pos) {
                let direction = if i == 0 { state.direction } else { None };
                let pattern = self.renderer.render_snake_segment(direction, i, len);
                grid.set_logical_point(pos.x as usize, pos.y as usize, &pattern);
            }
        }

        grid
    }
}
