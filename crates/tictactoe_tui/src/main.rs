//! Terminal tic-tac-toe.
//!
//! Two players share the keyboard, or one plays against a computer opponent
//! that picks uniformly at random among the empty cells.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_engine::{GameEngine, RandomIndex, RngIndex, ScheduledMove};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::SessionConfig;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(
        SessionConfig::load(Some(cli.config.as_path())).context("Failed to load session config")?,
    );

    init_tracing(&config)?;
    info!(?config, "Starting tic-tac-toe");

    let random = match config.seed() {
        Some(seed) => RngIndex::seeded(*seed),
        None => RngIndex::from_entropy(),
    };
    let mut app = App::new(GameEngine::with_random(random), &config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, config.computer_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!("Goodbye");
    Ok(())
}

/// Logs to a file so output never lands on the game screen.
fn init_tracing(config: &SessionConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draws, reads keys and plays due computer moves until the player quits.
#[instrument(skip_all)]
async fn run_app<R: RandomIndex>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<R>,
    delay: Duration,
) -> Result<()> {
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();

    loop {
        for scheduled in app.take_scheduled() {
            spawn_timer(timer_tx.clone(), scheduled, delay);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        while let Ok(scheduled) = timer_rx.try_recv() {
            app.fire(scheduled)?;
        }

        if event::poll(INPUT_POLL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code)
        {
            app.handle(action);
        }

        if app.should_quit() {
            return Ok(());
        }

        // Let timer tasks run between polls.
        tokio::task::yield_now().await;
    }
}

/// Sends `scheduled` back to the game loop after `delay`.
fn spawn_timer(tx: mpsc::UnboundedSender<ScheduledMove>, scheduled: ScheduledMove, delay: Duration) {
    debug!(?scheduled, ?delay, "Arming computer move timer");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Receiver is gone once the game loop has exited.
        let _ = tx.send(scheduled);
    });
}
