//! Configuration loading and puzzle-definition decoding.
//!
//! The config file lives at `~/.starbattle/config.toml`. Every section is
//! optional; a missing file is not an error.
//!
//! ```toml
//! [board]
//! dimension = 9
//! stars_per_line = 2
//! probabilistic = false
//!
//! [export]
//! pretty = true
//! ```

pub mod puzzle;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use starbattle_types::{BoardDimensions, DimensionsError};

pub use puzzle::{PuzzleDefinition, PuzzleError};

// Default value function for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid [board] section: {0}")]
    Dimensions(#[from] DimensionsError),
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::Dimensions(_) => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StarBattleConfig {
    pub board: Option<BoardConfig>,
    pub export: Option<ExportConfig>,
}

/// Board shape defaults.
///
/// ```toml
/// [board]
/// dimension = 10
/// stars_per_line = 2
/// probabilistic = true
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct BoardConfig {
    /// Cells on a side. Default: 9.
    pub dimension: Option<usize>,
    /// Stars per row, column and shape. Default: 2.
    pub stars_per_line: Option<usize>,
    /// Build probabilistic boards unless told otherwise. Default: false.
    #[serde(default)]
    pub probabilistic: bool,
}

/// Probability field export options.
#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    /// Pretty-print JSON output. Default: true.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl StarBattleConfig {
    /// Load from the default path. `Ok(None)` when no config file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Config loaded");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Resolve `[board]` into validated dimensions, filling in the standard
    /// 9×9 two-star values for anything left out.
    pub fn board_dimensions(&self) -> Result<BoardDimensions, ConfigError> {
        let standard = BoardDimensions::STANDARD;
        let Some(board) = &self.board else {
            return Ok(standard);
        };
        let dims = BoardDimensions::new(
            board.dimension.unwrap_or(standard.dimension()),
            board.stars_per_line.unwrap_or(standard.stars_per_line()),
        )?;
        Ok(dims)
    }

    #[must_use]
    pub fn probabilistic(&self) -> bool {
        self.board.as_ref().is_some_and(|board| board.probabilistic)
    }

    #[must_use]
    pub fn pretty_export(&self) -> bool {
        self.export.as_ref().is_none_or(|export| export.pretty)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".starbattle").join("config.toml"))
}
