pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod life;
pub mod moves;
pub mod player;
pub mod snake;
pub mod view;
pub mod vision;
