mod render;

pub use render::CanvasSurface;

use anyhow::anyhow;
use common::render::{draw_frame, GridLayout};
use common::{Direction, GameCommand, GameConfig, GameEngine, GameEvent, HighScoreStore, Skin};
use wasm_bindgen::prelude::*;

const HIGH_SCORE_KEY: &str = "snakeHighScore";

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// High score kept in the browser's `localStorage`.
pub struct LocalStorageHighScore;

impl LocalStorageHighScore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl HighScoreStore for LocalStorageHighScore {
    fn load(&self) -> u32 {
        Self::storage()
            .and_then(|storage| storage.get_item(HIGH_SCORE_KEY).ok().flatten())
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> anyhow::Result<()> {
        let storage = Self::storage().ok_or_else(|| anyhow!("localStorage is unavailable"))?;
        storage
            .set_item(HIGH_SCORE_KEY, &score.to_string())
            .map_err(|e| anyhow!("failed to store high score: {:?}", e))
    }
}

/// Game controller exposed to the host page.
///
/// Event-producing methods return the events as a JSON array so the page can
/// update its HUD and report the final score.
#[wasm_bindgen]
pub struct WebGame {
    engine: GameEngine<LocalStorageHighScore>,
    surface: CanvasSurface,
    layout: GridLayout,
    skin: &'static Skin,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: web_sys::HtmlCanvasElement, seed: u32) -> Result<WebGame, JsValue> {
        let config = GameConfig::default();
        let layout = GridLayout::from_config(&config);
        canvas.set_width(layout.side() as u32);
        canvas.set_height(layout.side() as u32);
        let surface = CanvasSurface::new(&canvas)?;

        Ok(WebGame {
            engine: GameEngine::new(config, LocalStorageHighScore, seed as u64),
            surface,
            layout,
            skin: Skin::default_skin(),
        })
    }

    pub fn start(&mut self, initial_lives: Option<u32>) -> Result<String, JsValue> {
        events_json(&self.engine.start(initial_lives))
    }

    /// Feed wall-clock time in milliseconds, e.g. the delta between two animation frames.
    pub fn advance(&mut self, dt_ms: f64) -> Result<String, JsValue> {
        let dt = std::time::Duration::from_secs_f64(dt_ms.max(0.0) / 1000.0);
        events_json(&self.engine.advance(dt))
    }

    pub fn tick(&mut self) -> Result<String, JsValue> {
        events_json(&self.engine.tick())
    }

    /// Run a JSON-encoded `GameCommand`.
    pub fn exec_command(&mut self, command_json: &str) -> Result<String, JsValue> {
        let command: GameCommand = serde_json::from_str(command_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid command: {}", e)))?;
        events_json(&self.engine.exec_command(&command))
    }

    /// Handle a `KeyboardEvent.key` value: arrows/WASD steer, space pauses.
    pub fn handle_key(&mut self, key: &str) -> Result<String, JsValue> {
        if key == " " && self.engine.state().is_playing() {
            return events_json(&[self.engine.toggle_pause()]);
        }
        if let Some(direction) = direction_for_key(key) {
            self.engine.request_direction(direction);
        }
        Ok("[]".to_string())
    }

    pub fn set_bonus_lives(&mut self, bonus_lives: u32) {
        self.engine.set_bonus_lives(bonus_lives);
    }

    /// Equip a skin by id; unknown ids fall back to the default look.
    pub fn set_skin(&mut self, skin_id: &str) {
        self.skin = Skin::lookup(skin_id);
    }

    pub fn score(&self) -> u32 {
        self.engine.state().score
    }

    pub fn lives(&self) -> u32 {
        self.engine.state().lives
    }

    pub fn high_score(&self) -> u32 {
        self.engine.high_score()
    }

    pub fn is_paused(&self) -> bool {
        self.engine.state().paused
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.engine.state())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }

    pub fn render(&mut self) {
        draw_frame(&mut self.surface, self.engine.state(), self.skin, &self.layout);
    }
}

fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

fn events_json(events: &[GameEvent]) -> Result<String, JsValue> {
    for event in events {
        if let GameEvent::GameOver { score, high_score, .. } = event {
            log::info!("Game over with score {} (high score {})", score, high_score);
        }
    }
    serde_json::to_string(events)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize events: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(direction_for_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(direction_for_key("a"), Some(Direction::Left));
        assert_eq!(direction_for_key("D"), Some(Direction::Right));
        assert_eq!(direction_for_key("Enter"), None);
    }
}
