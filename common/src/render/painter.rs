use super::{Color, Surface};
use crate::{Direction, GameConfig, Position, SessionState, Skin};

pub const BACKGROUND: Color = Color::rgb(0x0a, 0x0a, 0x0c);
pub const FOOD: Color = Color::rgb(0xff, 0x47, 0x57);
pub const FOOD_HIGHLIGHT: Color = Color::rgba(255, 255, 255, 128);

/// Geometry of the grid on the surface. Offsets used by the painter are
/// tuned for 20px cells and scale with `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub cell_size: f64,
    pub grid_cells: u16,
}

impl GridLayout {
    pub fn new(cell_size: f64, grid_cells: u16) -> Self {
        GridLayout { cell_size, grid_cells }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        GridLayout::new(config.cell_size as f64, config.grid_cells)
    }

    pub fn side(&self) -> f64 {
        self.cell_size * self.grid_cells as f64
    }

    fn scale(&self) -> f64 {
        self.cell_size / 20.0
    }

    fn origin(&self, position: &Position) -> (f64, f64) {
        (position.x as f64 * self.cell_size, position.y as f64 * self.cell_size)
    }
}

/// Paint the whole frame: background, food, then the snake head first.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &SessionState, skin: &Skin, layout: &GridLayout) {
    let side = layout.side();
    surface.fill_rect(0.0, 0.0, side, side, BACKGROUND);

    if let Some(food) = &state.food {
        draw_food(surface, food, layout);
    }
    draw_snake(surface, state, skin, layout);
}

pub fn draw_food<S: Surface + ?Sized>(surface: &mut S, food: &Position, layout: &GridLayout) {
    let s = layout.scale();
    let cell = layout.cell_size;
    let (x, y) = layout.origin(food);

    surface.fill_round_rect(x + 2.0 * s, y + 2.0 * s, cell - 4.0 * s, cell - 4.0 * s, 8.0 * s, FOOD);
    surface.fill_circle(x + cell / 2.0, y + 6.0 * s, 3.0 * s, FOOD_HIGHLIGHT);
}

pub fn draw_snake<S: Surface + ?Sized>(surface: &mut S, state: &SessionState, skin: &Skin, layout: &GridLayout) {
    let s = layout.scale();
    let cell = layout.cell_size;
    let len = state.snake.len();

    for (i, segment) in state.snake.segments().enumerate() {
        let is_head = i == 0;
        let fill = if skin.gradient {
            gradient_color(i, len)
        } else if is_head {
            skin.head
        } else {
            skin.body
        };

        let (x, y) = layout.origin(segment);
        surface.fill_round_rect(x + s, y + s, cell - 2.0 * s, cell - 2.0 * s, 6.0 * s, fill);

        if is_head {
            let (dx, dy) = state.direction.map(|d: Direction| d.offset()).unwrap_or((0, 0));
            let ex = x + cell / 2.0 + dx as f64 * 6.0 * s;
            let ey = y + cell / 2.0 + dy as f64 * 6.0 * s;
            surface.fill_circle(ex - 3.0 * s, ey - 3.0 * s, 3.0 * s, skin.eye);
            surface.fill_circle(ex + 3.0 * s, ey - 3.0 * s, 3.0 * s, skin.eye);
        }
    }
}

/// Body colour of segment `index` on a gradient skin.
pub fn gradient_color(index: usize, len: usize) -> Color {
    let t = index as f64 / len.max(1) as f64;
    let channel = |v: f64| v.floor().clamp(0.0, 255.0) as u8;
    Color::rgb(
        channel(255.0 * (1.0 - t) + 255.0 * t * 0.76),
        channel(107.0 * (1.0 - t) + 212.0 * t * 0.5),
        channel(115.0 * (1.0 - t) + 170.0 * t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Raster;
    use crate::{GameConfig, Snake};
    use std::collections::VecDeque;

    fn frame(state: &SessionState, skin: &Skin) -> Raster {
        let layout = GridLayout::from_config(&GameConfig::default());
        let mut raster = Raster::new(400, 400);
        draw_frame(&mut raster, state, skin, &layout);
        raster
    }

    fn session() -> SessionState {
        let mut state = SessionState::new(&GameConfig::default());
        state.food = Some(Position::new(1, 1));
        state
    }

    #[test]
    fn background_fills_empty_cells() {
        let raster = frame(&session(), Skin::default_skin());
        assert_eq!(raster.pixel(0, 0), Some(BACKGROUND));
        assert_eq!(raster.pixel(399, 399), Some(BACKGROUND));
    }

    #[test]
    fn food_has_body_and_highlight() {
        let raster = frame(&session(), Skin::default_skin());
        assert_eq!(raster.pixel(30, 30), Some(FOOD));
        let highlight = raster.pixel(29, 25).expect("in bounds");
        assert_eq!(highlight, FOOD_HIGHLIGHT.over(FOOD));
        // Inset border of the food cell stays background
        assert_eq!(raster.pixel(21, 21), Some(BACKGROUND));
    }

    #[test]
    fn head_is_rounded_with_eyes() {
        let skin = Skin::default_skin();
        let raster = frame(&session(), skin);
        assert_eq!(raster.pixel(210, 216), Some(skin.head));
        assert_eq!(raster.pixel(207, 207), Some(skin.eye));
        assert_eq!(raster.pixel(213, 207), Some(skin.eye));
        assert_eq!(raster.pixel(201, 201), Some(BACKGROUND));
    }

    #[test]
    fn eyes_follow_direction() {
        let skin = Skin::default_skin();
        let mut state = session();
        state.direction = Some(Direction::Right);
        let raster = frame(&state, skin);
        assert_eq!(raster.pixel(219, 207), Some(skin.eye));
        assert_eq!(raster.pixel(207, 207), Some(skin.head));
    }

    #[test]
    fn body_uses_body_colour() {
        let skin = Skin::lookup("skin_fire");
        let mut state = session();
        state.snake = Snake {
            body: VecDeque::from([Position::new(10, 10), Position::new(9, 10)]),
        };
        let raster = frame(&state, skin);
        assert_eq!(raster.pixel(190, 216), Some(skin.body));
    }

    #[test]
    fn gradient_interpolates_along_body() {
        let skin = Skin::lookup("skin_rainbow");
        let mut state = session();
        state.snake = Snake {
            body: VecDeque::from([Position::new(10, 10), Position::new(9, 10)]),
        };
        let raster = frame(&state, skin);
        assert_eq!(raster.pixel(210, 216), Some(Color::rgb(255, 107, 115)));
        assert_eq!(raster.pixel(190, 216), Some(Color::rgb(224, 106, 142)));
    }

    #[test]
    fn smaller_cells_scale_the_frame() {
        let layout = GridLayout::new(10.0, 20);
        let mut raster = Raster::new(200, 200);
        draw_frame(&mut raster, &session(), Skin::default_skin(), &layout);
        assert_eq!(raster.pixel(15, 15), Some(FOOD));
        assert_eq!(raster.pixel(105, 108), Some(Skin::default_skin().head));
    }
}
