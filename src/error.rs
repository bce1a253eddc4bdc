use std::path::PathBuf;

/// Contract violations raised by the board model.
///
/// Ordinary rejections during play (occupied cell, finished game, coordinates
/// off the board) are reported as `false`/`None` by the game API instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GomokuError {
    #[error("board size must be at least {min}x{min}, got {size}")]
    InvalidBoardSize { size: usize, min: usize },

    #[error("board size must be at most {max}x{max}, got {size}")]
    BoardTooLarge { size: usize, max: usize },

    #[error("position ({row}, {col}) is out of bounds for a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cannot place an empty stone")]
    InvalidStone,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
