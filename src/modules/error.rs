use std::io;

use thiserror::Error;

use crate::modules::board::Tag;

/// Reasons a game cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board {height}x{width} is too small; both sides must be at least {min}")]
    BoardTooSmall {
        height: usize,
        width: usize,
        min: usize,
    },
    #[error("board interior has {available} free cells but {needed} are needed for snakes and food")]
    Crowded { needed: usize, available: usize },
    #[error("no free horizontal pair left to spawn agent {id}")]
    NoSpawnRoom { id: Tag },
    #[error("no free cell left for food item {placed} of {wanted}")]
    NoFoodRoom { placed: usize, wanted: usize },
    #[error("too many players: {count} (at most {max})")]
    TooManyPlayers { count: usize, max: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Invalid(#[from] GameError),
}
