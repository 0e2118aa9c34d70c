use crate::consts;
use crate::game::grid::{Bounds, BoundsCheck};
use crate::game::Settings;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration, as read from a configuration file and adjusted by
/// command-line options
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Width & height of the grid in cells
    pub(crate) grid_size: u16,

    /// Minimum distance between a newly spawned snake and the grid's edges
    pub(crate) spawn_margin: u16,

    /// Time between movements of the snake, in milliseconds
    pub(crate) tick_delay_ms: u64,

    pub(crate) bounds_check: BoundsCheck,

    /// Whether to quit as soon as the game is over.  If false, the final
    /// board stays on screen until the player restarts or quits.
    pub(crate) exit_on_game_over: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            grid_size: consts::DEFAULT_GRID_SIZE,
            spawn_margin: consts::DEFAULT_SPAWN_MARGIN,
            tick_delay_ms: consts::DEFAULT_TICK_DELAY_MS,
            bounds_check: BoundsCheck::default(),
            exit_on_game_over: true,
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Check that a game can actually be played with this configuration.
    ///
    /// Every snake the game can spawn (the head plus its initial body trailing
    /// below it) must lie entirely inside the playable region, and must not be
    /// able to leave it on its first step.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_delay_ms == 0 {
            return Err(ConfigError::ZeroTickDelay);
        }
        let grid = i32::from(self.grid_size);
        let margin = i32::from(self.spawn_margin);
        let limit = Bounds::new(self.grid_size, self.bounds_check).limit();
        let body = i32::try_from(consts::INITIAL_CHAIN_LENGTH - 1).unwrap_or(i32::MAX);
        let lowest_head = grid - margin;
        if margin < 1 || margin > lowest_head || lowest_head.saturating_add(body) >= limit {
            return Err(ConfigError::BadSpawnMargin {
                grid_size: self.grid_size,
                spawn_margin: self.spawn_margin,
            });
        }
        Ok(())
    }

    pub(crate) fn settings(&self) -> Settings {
        Settings {
            grid_size: self.grid_size,
            spawn_margin: self.spawn_margin,
            bounds_check: self.bounds_check,
        }
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("spawn margin of {spawn_margin} does not leave room for a new snake on a {grid_size}×{grid_size} grid")]
    BadSpawnMargin { grid_size: u16, spawn_margin: u16 },
    #[error("tick delay must be greater than zero")]
    ZeroTickDelay,
}
