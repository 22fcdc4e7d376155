use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io::{self, Stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};

use common::{GameEngine, HighScoreStore};
use terminal::api::ApiClient;
use terminal::app::{App, AppCommand, Background};
use terminal::config::{Args, Config};
use terminal::high_score::FileHighScore;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_args(Args::parse());
    init_logging(&config)?;

    info!(
        "Starting snake-terminal (backend: {}, tick: {}ms)",
        config.api_url.as_deref().unwrap_or("offline"),
        config.game.tick_interval_ms
    );

    let api = config
        .api_url
        .as_deref()
        .map(ApiClient::new)
        .transpose()
        .context("Invalid backend url")?;
    let high_scores: Box<dyn HighScoreStore> = Box::new(FileHighScore::new(&config.high_score_file));
    let engine = GameEngine::new(config.game, high_scores, config.seed);

    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(engine, api, tx);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    terminal.hide_cursor()?;

    let res = run_app(&mut terminal, &mut app, rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Exited with error: {:?}", err);
    }
    res
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(dir) = config.log_file.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut rx: UnboundedReceiver<Background>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frame_timer = tokio::time::interval(FRAME_INTERVAL);
    let mut last_update = Instant::now();

    loop {
        let command = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_input(key),
                Some(Ok(_)) => None,
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => Some(AppCommand::Quit),
            },
            _ = frame_timer.tick() => {
                let now = Instant::now();
                let dt = now.duration_since(last_update);
                last_update = now;
                let command = app.update(dt);
                terminal.draw(|frame| app.render(frame)).context("Failed to draw frame")?;
                command
            }
            Some(message) = rx.recv() => {
                app.handle_background(message);
                None
            }
        };

        match command {
            Some(AppCommand::Quit) => {
                info!("Quitting");
                return Ok(());
            }
            Some(command) => app.handle_command(command)?,
            None => {}
        }
    }
}
