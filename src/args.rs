use crate::config::{Config, ConfigError};
use crate::game::grid::BoundsCheck;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static HELP: &str = "\
Usage: gridsnake [<options>]

Play snake in the terminal.  Steer with the arrow keys, WASD, or hjkl; press
r to start over and Esc or q to quit.

Options:
  -c, --config <PATH>       Read configuration from the given file
      --grid-size <N>       Width & height of the grid in cells
      --spawn-margin <N>    Keep a new snake at least N cells from the edges
      --tick-delay-ms <MS>  Time between moves of the snake
      --full-bounds         Let the snake use the last row & column of the grid
      --keep-open           Stay on the final board after a game over
      --seed <N>            Seed the random number generator
      --log-file <PATH>     Write log messages to the given file
  -h, --help                Show this help and exit
  -V, --version             Show the program version and exit
";

/// What the program has been asked to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("grid-size") => args.grid_size = Some(parser.value()?.parse()?),
                Arg::Long("spawn-margin") => args.spawn_margin = Some(parser.value()?.parse()?),
                Arg::Long("tick-delay-ms") => args.tick_delay_ms = Some(parser.value()?.parse()?),
                Arg::Long("full-bounds") => args.full_bounds = true,
                Arg::Long("keep-open") => args.keep_open = true,
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Long("log-file") => args.log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

/// Command-line options for a game
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) grid_size: Option<u16>,
    pub(crate) spawn_margin: Option<u16>,
    pub(crate) tick_delay_ms: Option<u64>,
    pub(crate) full_bounds: bool,
    pub(crate) keep_open: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) log_file: Option<PathBuf>,
}

impl Arguments {
    /// Read the configuration file (the one given with `--config`, or else
    /// the default one if it exists), apply any command-line overrides, and
    /// validate the result.
    pub(crate) fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::default_path()
                .map_or_else(|_| Ok(Config::default()), |p| Config::load(&p, true))?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(spawn_margin) = self.spawn_margin {
            config.spawn_margin = spawn_margin;
        }
        if let Some(tick_delay_ms) = self.tick_delay_ms {
            config.tick_delay_ms = tick_delay_ms;
        }
        if self.full_bounds {
            config.bounds_check = BoundsCheck::Full;
        }
        if self.keep_open {
            config.exit_on_game_over = false;
        }
    }
}
