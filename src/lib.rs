pub mod modules;

pub use modules::board::{
    Board, BoardSnapshot, EMPTY, FIRST_AGENT_TAG, FOOD, MIN_SIZE, Tag, WALL,
};
pub use modules::config::{self, DEFAULT_FOOD, DEFAULT_SIZE, GameConfig, load_config};
pub use modules::error::{ConfigError, GameError};
pub use modules::game::{Agent, DeathReason, Event, Game, MAX_AGENTS, Round};
pub use modules::life::{self, FULL_LIFE, HUNGER_DECREMENT, Hunger};
pub use modules::moves::{AgentId, Choice, Move, resolve};
pub use modules::player::{HumanPlayer, Player, RandomPlayer, StraightPlayer};
pub use modules::snake::{Direction, MIN_LEN, Position, Snake};
pub use modules::view::{AgentSnapshot, GameSnapshot, GameView};
pub use modules::vision::{self, Reading, VisionConfig};
