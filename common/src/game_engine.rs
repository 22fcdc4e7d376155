use std::time::Duration;

use crate::food::place_food;
use crate::util::PseudoRandom;
use crate::{
    Direction, GameCommand, GameConfig, GameEvent, GamePhase, HighScoreStore, LifeLossCause,
    MemoryHighScore, SessionState, TickScheduler,
};

/// Owns one play session and advances it one tick at a time.
///
/// Front ends drive it either with [`GameEngine::advance`] (wall-clock
/// deltas, ticks handed out by the internal [`TickScheduler`]) or by calling
/// [`GameEngine::tick`] directly. Every operation returns the events it
/// produced so the caller can update its UI and talk to the backend.
pub struct GameEngine<H: HighScoreStore = MemoryHighScore> {
    config: GameConfig,
    state: SessionState,
    scheduler: TickScheduler,
    rng: PseudoRandom,
    high_scores: H,
    high_score: u32,
}

impl<H: HighScoreStore> GameEngine<H> {
    pub fn new(config: GameConfig, high_scores: H, rng_seed: u64) -> Self {
        let high_score = high_scores.load();
        GameEngine {
            state: SessionState::new(&config),
            scheduler: TickScheduler::new(config.tick_interval()),
            rng: PseudoRandom::new(rng_seed),
            config,
            high_scores,
            high_score,
        }
    }

    pub fn exec_command(&mut self, command: &GameCommand) -> Vec<GameEvent> {
        match command {
            GameCommand::Start { initial_lives } => self.start(*initial_lives),
            GameCommand::Tick => self.tick(),
            GameCommand::Turn { direction } => {
                self.request_direction(*direction);
                Vec::new()
            }
            GameCommand::TogglePause => vec![self.toggle_pause()],
        }
    }

    /// Begin a new session. Bonus lives bought earlier are folded into the
    /// starting lives unless `initial_lives` overrides them.
    pub fn start(&mut self, initial_lives: Option<u32>) -> Vec<GameEvent> {
        let mut out = Vec::new();
        self.scheduler.stop();

        let lives = initial_lives.unwrap_or(self.config.starting_lives + self.state.bonus_lives);
        self.state.bonus_lives = 0;
        self.state.lives = lives;
        self.state.score = 0;
        self.state.paused = false;
        self.state.phase = GamePhase::Playing;
        self.state.ticks = 0;
        self.state.tick_interval_ms = self.config.tick_interval_ms;
        self.state.respawn(self.config.start);
        out.push(GameEvent::Started { lives });
        self.spawn_food(&mut out);

        self.scheduler.start(self.config.tick_interval());
        log::debug!("Session started with {} lives", lives);
        out
    }

    /// Run one simulation step.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if self.state.paused || !self.state.is_playing() {
            return out;
        }
        let Some(direction) = self.state.requested_direction.take().or(self.state.direction) else {
            return out;
        };

        if self.state.direction != Some(direction) {
            out.push(GameEvent::DirectionChanged { direction });
        }
        self.state.direction = Some(direction);
        self.state.ticks += 1;

        let next = self.state.snake.head().moved(direction);

        if !self.config.in_bounds(&next) {
            self.lose_life(LifeLossCause::Wall, &mut out);
            return out;
        }
        if self.state.snake.contains_point(&next) {
            self.lose_life(LifeLossCause::SelfCollision, &mut out);
            return out;
        }

        let ate = self.state.food == Some(next);
        self.state.snake.advance_to(next, ate);
        if ate {
            self.state.score += 1;
            out.push(GameEvent::FoodEaten { position: next, score: self.state.score });
            self.spawn_food(&mut out);
        }

        out
    }

    /// Queue `direction` for the next tick. Returns whether it was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.state.paused || !self.state.is_playing() {
            return false;
        }
        if self.state.direction.is_some_and(|current| current.is_opposite(direction)) {
            return false;
        }
        self.state.requested_direction = Some(direction);
        true
    }

    /// Flip the paused flag. The scheduler keeps running; paused ticks do nothing.
    pub fn toggle_pause(&mut self) -> GameEvent {
        self.state.paused = !self.state.paused;
        if self.state.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        }
    }

    /// Feed elapsed time to the scheduler and run every tick that became due.
    pub fn advance(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut out = Vec::new();
        self.scheduler.advance(dt);
        // Life loss restarts the scheduler and game over stops it; both end the loop
        while self.scheduler.poll_tick() {
            out.extend(self.tick());
        }
        out
    }

    /// Apply the extra-lives count reported by the backend after a purchase.
    pub fn set_bonus_lives(&mut self, bonus_lives: u32) {
        self.state.bonus_lives = bonus_lives;
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    fn spawn_food(&mut self, out: &mut Vec<GameEvent>) {
        self.state.food = place_food(&mut self.rng, &self.state.snake, self.config.grid_cells);
        if let Some(position) = self.state.food {
            out.push(GameEvent::FoodSpawned { position });
        }
    }

    fn lose_life(&mut self, cause: LifeLossCause, out: &mut Vec<GameEvent>) {
        self.scheduler.stop();

        let bonus_consumed = self.state.bonus_lives > 0;
        if bonus_consumed {
            self.state.bonus_lives -= 1;
        }
        self.state.lives = self.state.lives.saturating_sub(1);
        out.push(GameEvent::LifeLost {
            cause,
            lives_remaining: self.state.lives,
            bonus_consumed,
        });
        log::debug!("Life lost ({:?}), {} remaining", cause, self.state.lives);

        if self.state.lives == 0 {
            self.game_over(out);
            return;
        }

        self.state.respawn(self.config.start);
        out.push(GameEvent::Respawned { position: self.config.start });
        self.spawn_food(out);
        self.scheduler.start(self.config.tick_interval());
    }

    fn game_over(&mut self, out: &mut Vec<GameEvent>) {
        self.scheduler.stop();
        self.state.phase = GamePhase::GameOver;

        let score = self.state.score;
        let new_record = score > self.high_score;
        if new_record {
            self.high_score = score;
            if let Err(e) = self.high_scores.save(score) {
                log::warn!("Failed to persist high score {}: {:#}", score, e);
            }
        }
        log::info!("Game over with score {} (high score {})", score, self.high_score);
        out.push(GameEvent::GameOver {
            score,
            high_score: self.high_score,
            new_record,
        });
    }
}

#[cfg(test)]
impl<H: HighScoreStore> GameEngine<H> {
    pub(crate) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub(crate) fn high_scores(&self) -> &H {
        &self.high_scores
    }
}
