use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::modules::board::MIN_SIZE;
use crate::modules::error::{ConfigError, GameError};
use crate::modules::life::HUNGER_DECREMENT;
use crate::modules::vision::VisionConfig;

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_FOOD: usize = 3;

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_food() -> usize {
    DEFAULT_FOOD
}

fn default_hunger() -> f64 {
    HUNGER_DECREMENT
}

/// Everything needed to build a game apart from its players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_size")]
    pub height: usize,
    #[serde(default = "default_size")]
    pub width: usize,
    /// Food items kept on the board at all times.
    #[serde(default = "default_food")]
    pub food: usize,
    #[serde(default = "default_hunger")]
    pub hunger_decrement: f64,
    #[serde(default)]
    pub vision: VisionConfig,
    /// Fixed seed for placement; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_SIZE,
            width: DEFAULT_SIZE,
            food: DEFAULT_FOOD,
            hunger_decrement: HUNGER_DECREMENT,
            vision: VisionConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn sized(height: usize, width: usize, food: usize) -> Self {
        Self {
            height,
            width,
            food,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.height < MIN_SIZE || self.width < MIN_SIZE {
            return Err(GameError::BoardTooSmall {
                height: self.height,
                width: self.width,
                min: MIN_SIZE,
            });
        }
        if !self.hunger_decrement.is_finite() || self.hunger_decrement < 0.0 {
            return Err(GameError::InvalidConfig(
                "hunger_decrement must be a non-negative number",
            ));
        }
        if self.vision.depth == 0 {
            return Err(GameError::InvalidConfig("vision depth must be at least 1"));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let bytes = fs::read(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: GameConfig = serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
