mod app;
mod args;
mod config;
mod consts;
mod game;
mod input;
mod render;
mod rng;
mod util;
use crate::app::App;
use crate::args::Command;
use crate::game::Game;
use crate::input::TerminalInput;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::DefaultTerminal;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Command::from_parser(lexopt::Parser::from_env())? {
        Command::Run(args) => args,
        Command::Help => {
            print!("{}", args::HELP);
            return Ok(());
        }
        Command::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = args.load_config().context("invalid configuration")?;
    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }
    info!(
        grid_size = config.grid_size,
        spawn_margin = config.spawn_margin,
        tick_delay_ms = config.tick_delay_ms,
        bounds_check = ?config.bounds_check,
        seed = ?args.seed,
        "Starting gridsnake"
    );
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = Game::new(config.settings(), rng);
    let (terminal, _guard) = TerminalGuard::acquire()?;
    let exit = App::new(game, TerminalInput, terminal)
        .tick_period(config.tick_period())
        .exit_on_game_over(config.exit_on_game_over)
        .run()
        .context("error while running game")?;
    info!(?exit, "Exiting");
    Ok(())
}

/// Send log messages to `path`.  The terminal itself is occupied by the game,
/// so without a log file nothing is logged.
fn init_logging(path: &Path) -> Result<(), ResourceError> {
    let file = fs_err::File::create(path).map_err(ResourceError::LogFile)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info")));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(ResourceError::Subscriber)
}

/// Puts the terminal back to normal when dropped
#[derive(Debug)]
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn acquire() -> Result<(DefaultTerminal, TerminalGuard), ResourceError> {
        TerminalGuard::acquire_with(ratatui::try_init, ratatui::restore)
    }

    /// Set up the terminal with `init`.  `restore` is run when the guard is
    /// dropped, or right away if `init` fails, as setup may have failed after
    /// raw mode was already enabled.
    fn acquire_with<T, F>(init: F, restore: fn()) -> Result<(T, TerminalGuard), ResourceError>
    where
        F: FnOnce() -> io::Result<T>,
    {
        match init() {
            Ok(terminal) => Ok((terminal, TerminalGuard { restore })),
            Err(e) => {
                restore();
                Err(ResourceError::Terminal(e))
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

#[derive(Debug, Error)]
enum ResourceError {
    #[error("failed to set up terminal")]
    Terminal(#[source] io::Error),
    #[error("failed to open log file")]
    LogFile(#[source] io::Error),
    #[error("failed to install logger")]
    Subscriber(#[source] tracing::subscriber::SetGlobalDefaultError),
}
