use common::{Direction, GameConfig, GameEngine, MemoryHighScore, Skin};
use terminal::render::{
    arena::ArenaRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    let config = GameConfig::default();
    let mut engine = GameEngine::new(config, MemoryHighScore::new(0), 42);
    engine.start(None);

    // A short scripted run so the board shows a turning snake
    for direction in [Direction::Right, Direction::Right, Direction::Down, Direction::Down, Direction::Left] {
        engine.request_direction(direction);
        engine.tick();
    }

    for (name, char_dims) in [("2x1", CharDimensions::new(2, 1)), ("1x1", CharDimensions::new(1, 1))] {
        let renderer = ArenaRenderer::new(StandardRenderer::new(char_dims, Skin::default_skin()));
        let render_config = RenderConfig { chars_per_point: char_dims };
        let grid = renderer.render(engine.state(), engine.config().grid_cells, &render_config);

        println!("{} rendering ({}x{} chars):", name, grid.physical_width(), grid.physical_height());
        for line in grid.into_lines() {
            println!("|{}|", line.into_iter().collect::<String>());
        }
        println!();
    }

    let state = engine.state();
    println!("score {} | lives {} | length {}", state.score, state.lives, state.snake.len());
}
