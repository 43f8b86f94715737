use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::game::Game;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::settings::{default_log_path, load_settings};
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::terminal_view::TerminalView;
use log::{error, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Upper bound on how long one loop iteration waits for input.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Playable board width in cells. Given alone, it also sets the height.
    #[arg(long)]
    width: Option<u16>,

    /// Playable board height in cells. Given alone, it also sets the width.
    #[arg(long)]
    height: Option<u16>,

    /// Starting snake length; anything below 3 counts as 3.
    #[arg(long)]
    length: Option<usize>,

    /// Seed for snake and apple placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to read instead of the default one.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = resolve_config(&cli)?;
    let mut game = Game::new(&config, TerminalView::new()).map_err(|err| {
        error!("invalid configuration: {err}");
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    info!(
        "board {}x{}, snake length {}",
        config.width,
        config.height,
        config.effective_snake_length()
    );

    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut game)
}

fn run(session: &mut TerminalSession, game: &mut Game<TerminalView>) -> io::Result<()> {
    let mut input = InputHandler::new();
    let mut last_frame = Instant::now();

    loop {
        session.draw(game.board(), game.view())?;

        if let Some(game_input) = input.poll_input(FRAME_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => {
                    game.turn(direction);
                }
                GameInput::Confirm => {
                    if let Err(err) = game.confirm() {
                        warn!("confirm ignored: {err}");
                    }
                }
                GameInput::CycleTheme => game.view_mut().cycle_theme(),
            }
        }

        let now = Instant::now();
        game.advance(now - last_frame);
        last_frame = now;
    }

    info!("quit");
    Ok(())
}

/// Defaults, then the settings file, then command-line flags.
fn resolve_config(cli: &Cli) -> io::Result<GameConfig> {
    let mut config = load_settings(cli.config.as_deref())?.with_dimensions(cli.width, cli.height);

    if let Some(length) = cli.length {
        config.snake_length = length;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(config)
}

/// Logs go to a file: the terminal is in raw mode while the game runs.
fn init_logging(cli: &Cli) -> io::Result<()> {
    let path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    WriteLogger::init(level, Config::default(), File::create(&path)?).map_err(io::Error::other)
}
