use clap::Parser;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use common::{GameConfig, DEFAULT_TICK_INTERVAL_MS};

#[derive(Parser, Debug, Clone)]
#[command(name = "snake-terminal", version, about = "Snake with a coin store, in your terminal")]
pub struct Args {
    /// Base URL of the coin/store backend
    #[arg(long, env = "SNAKE_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Play without talking to the backend
    #[arg(long, env = "SNAKE_OFFLINE", default_value_t = false)]
    pub offline: bool,

    /// Milliseconds between game ticks
    #[arg(long, env = "SNAKE_TICK_MS", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    pub tick_ms: u64,

    /// Where the high score is kept
    #[arg(long, env = "SNAKE_HIGH_SCORE_FILE")]
    pub high_score_file: Option<PathBuf>,

    /// Log file (the terminal itself is taken by the game)
    #[arg(long, env = "SNAKE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when running offline.
    pub api_url: Option<String>,
    pub game: GameConfig,
    pub high_score_file: PathBuf,
    pub log_file: PathBuf,
    pub seed: u64,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let data_dir = dirs::data_local_dir()
            .map(|dir| dir.join("snake-arcade"))
            .unwrap_or_else(std::env::temp_dir);

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        });

        Config {
            api_url: (!args.offline).then_some(args.api_url),
            game: GameConfig::default().with_tick_interval_ms(args.tick_ms.max(1)),
            high_score_file: args
                .high_score_file
                .unwrap_or_else(|| data_dir.join("high_score.json")),
            log_file: args
                .log_file
                .unwrap_or_else(|| std::env::temp_dir().join("snake-terminal.log")),
            seed,
        }
    }
}
