use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{CELL_SIZE, DEFAULT_TICK_INTERVAL_MS, Direction, GRID_CELLS, Position, STARTING_LIVES, Snake};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_cells: u16,
    pub cell_size: u32,
    pub tick_interval_ms: u64,
    pub starting_lives: u32,
    pub start: Position,
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Whether `position` lies on the grid.
    pub fn in_bounds(&self, position: &Position) -> bool {
        let cells = self.grid_cells as i16;
        position.x >= 0 && position.x < cells && position.y >= 0 && position.y < cells
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let center = (GRID_CELLS / 2) as i16;
        GameConfig {
            grid_cells: GRID_CELLS,
            cell_size: CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            starting_lives: STARTING_LIVES,
            start: Position::new(center, center),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but `start` not called yet.
    Ready,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLossCause {
    Wall,
    SelfCollision,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Start { initial_lives: Option<u32> },
    Tick,
    Turn { direction: Direction },
    TogglePause,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started { lives: u32 },
    DirectionChanged { direction: Direction },
    FoodEaten { position: Position, score: u32 },
    FoodSpawned { position: Position },
    LifeLost { cause: LifeLossCause, lives_remaining: u32, bonus_consumed: bool },
    Respawned { position: Position },
    Paused,
    Resumed,
    GameOver { score: u32, high_score: u32, new_record: bool },
}

/// Everything that lives for one play session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub snake: Snake,
    /// Direction applied at the last tick. `None` until the first move.
    pub direction: Option<Direction>,
    /// Direction to apply at the next tick.
    pub requested_direction: Option<Direction>,
    pub food: Option<Position>,
    pub score: u32,
    pub lives: u32,
    pub bonus_lives: u32,
    pub paused: bool,
    pub phase: GamePhase,
    pub tick_interval_ms: u64,
    pub ticks: u64,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        SessionState {
            snake: Snake::new(config.start),
            direction: None,
            requested_direction: None,
            food: None,
            score: 0,
            lives: config.starting_lives,
            bonus_lives: 0,
            paused: false,
            phase: GamePhase::Ready,
            tick_interval_ms: config.tick_interval_ms,
            ticks: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Put a fresh length-1 snake on the start cell with no direction.
    pub(crate) fn respawn(&mut self, start: Position) {
        self.snake = Snake::new(start);
        self.direction = None;
        self.requested_direction = None;
    }
}
