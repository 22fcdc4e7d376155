use common::render::{gradient_color, BACKGROUND, FOOD};
use common::{Direction, GameConfig, Position, SessionState, Skin, Snake};
use ratatui::style::Modifier;
use terminal::render::{
    arena::ArenaRenderer,
    standard_renderer::StandardRenderer,
    tui_color,
    types::{CharDimensions, RenderConfig},
};

/// Two-segment snake heading right with its head at (6,5), food at (8,7).
fn sample_state() -> SessionState {
    let mut state = SessionState::new(&GameConfig::default());
    let mut snake = Snake::new(Position::new(5, 5));
    snake.advance_to(Position::new(6, 5), true);
    state.snake = snake;
    state.direction = Some(Direction::Right);
    state.food = Some(Position::new(8, 7));
    state
}

fn render(state: &SessionState, grid_cells: u16, char_dims: CharDimensions, skin: &'static Skin) -> terminal::render::types::CharGrid {
    let arena_renderer = ArenaRenderer::new(StandardRenderer::new(char_dims, skin));
    let config = RenderConfig { chars_per_point: char_dims };
    arena_renderer.render(state, grid_cells, &config)
}

#[test]
fn test_2x1_rendering() {
    let state = sample_state();
    let lines = render(&state, 10, CharDimensions::new(2, 1), Skin::default_skin()).into_lines();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].len(), 20);

    // Head at (6,5) -> chars 12,13, arrow on the leading side
    assert_eq!(lines[5][12], '█');
    assert_eq!(lines[5][13], '▶');

    // Body at (5,5) -> chars 10,11
    assert_eq!(lines[5][10], '▓');
    assert_eq!(lines[5][11], '▓');

    // Food at (8,7) -> chars 16,17
    assert_eq!(lines[7][16], '●');
    assert_eq!(lines[7][17], '●');

    assert_eq!(lines[0][0], ' ');
}

#[test]
fn test_1x1_rendering() {
    let mut state = sample_state();
    state.direction = Some(Direction::Up);
    let grid = render(&state, 10, CharDimensions::new(1, 1), Skin::default_skin());

    assert_eq!(grid.physical_width(), 10);
    assert_eq!(grid.physical_height(), 10);
    assert_eq!(grid.char_at(6, 5), Some('▲'));
    assert_eq!(grid.char_at(5, 5), Some('▓'));
    assert_eq!(grid.char_at(8, 7), Some('●'));
}

#[test]
fn fresh_snake_head_has_no_arrow() {
    let mut state = SessionState::new(&GameConfig::default());
    state.food = None;
    let grid = render(&state, 20, CharDimensions::new(2, 1), Skin::default_skin());

    assert_eq!(grid.char_at(20, 10), Some('█'));
    assert_eq!(grid.char_at(21, 10), Some('█'));
    assert!(grid.into_lines().iter().flatten().all(|&c| c == ' ' || c == '█'));
}

#[test]
fn styles_follow_skin() {
    let state = sample_state();
    let skin = Skin::lookup("skin_gold");
    let grid = render(&state, 10, CharDimensions::new(2, 1), skin);

    let head = grid.style_at(12, 5).unwrap();
    assert_eq!(head.fg, Some(tui_color(skin.head)));
    assert!(head.add_modifier.contains(Modifier::BOLD));

    let body = grid.style_at(10, 5).unwrap();
    assert_eq!(body.fg, Some(tui_color(skin.body)));

    let food = grid.style_at(16, 7).unwrap();
    assert_eq!(food.fg, Some(tui_color(FOOD)));

    let empty = grid.style_at(0, 0).unwrap();
    assert_eq!(empty.bg, Some(tui_color(BACKGROUND)));
}

#[test]
fn gradient_skin_colours_body_by_index() {
    let state = sample_state();
    let skin = Skin::lookup("skin_rainbow");
    assert!(skin.gradient);
    let grid = render(&state, 10, CharDimensions::new(2, 1), skin);

    assert_eq!(grid.style_at(12, 5).unwrap().fg, Some(tui_color(gradient_color(0, 2))));
    assert_eq!(grid.style_at(10, 5).unwrap().fg, Some(tui_color(gradient_color(1, 2))));
}

#[test]
fn off_grid_positions_are_skipped() {
    let mut state = sample_state();
    state.food = Some(Position::new(12, 3));
    let lines = render(&state, 10, CharDimensions::new(2, 1), Skin::default_skin()).into_lines();

    assert!(lines.iter().flatten().all(|&c| c != '●'));
    assert_eq!(lines[5][13], '▶');
}
