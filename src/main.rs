use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use powerup_snake::app::{App, AppControl};
use powerup_snake::input::poll_input;
use powerup_snake::renderer;
use powerup_snake::score::{JsonScoreStore, MemoryScoreStore, ScoreStore};
use powerup_snake::settings::{BoardSize, Settings, SettingsFile, SpeedPreset};
use powerup_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use powerup_snake::theme::ThemeId;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board size in cells per side (overrides saved settings).
    #[arg(long, value_enum)]
    grid: Option<BoardSize>,

    /// Starting speed (overrides saved settings).
    #[arg(long, value_enum)]
    speed: Option<SpeedPreset>,

    /// Color theme (overrides saved settings).
    #[arg(long, value_enum)]
    theme: Option<ThemeId>,

    /// Seed the RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Keep scores and settings in memory only.
    #[arg(long = "no-save")]
    no_save: bool,

    /// Append logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let settings_file = (!cli.no_save).then(SettingsFile::new);
    let mut settings = settings_file
        .as_ref()
        .map_or_else(Settings::default, SettingsFile::load);
    if let Some(grid) = cli.grid {
        settings.grid_size = grid;
    }
    if let Some(speed) = cli.speed {
        settings.speed = speed;
    }
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    tracing::info!(?settings, seed = ?cli.seed, "starting");

    install_panic_hook();

    if cli.no_save {
        let app = App::new(MemoryScoreStore::default(), settings, None, cli.seed);
        run(app)
    } else {
        let app = App::new(JsonScoreStore::new(), settings, settings_file, cli.seed);
        run(app)
    }
}

fn run<S: ScoreStore>(mut app: App<S>) -> io::Result<()> {
    let mut terminal = TerminalSession::enter()?;

    loop {
        let snapshot = app.snapshot(Instant::now());
        let pending = app.pending_settings();
        terminal.draw(|frame| {
            renderer::render(frame, &snapshot, snapshot.theme.tokens(), pending);
        })?;

        if let Some(input) = poll_input(app.poll_timeout(Instant::now()))? {
            if app.handle_input(input, Instant::now()) == AppControl::Quit {
                break;
            }
        }

        app.tick_if_due(Instant::now());
    }

    tracing::info!(best_score = app.session().best_score(), "exiting");
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
