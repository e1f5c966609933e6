//! Egocentric raycast sensor.
//!
//! Five rays leave the head relative to the current heading, in this order:
//! ahead, left, right, ahead-left, ahead-right. Each ray is sampled at depths
//! `1..=depth` and the output is laid out depth-major, so index `d * RAYS + r`
//! holds ray `r` at depth `d + 1`. Index 0 is always the cell straight ahead and
//! indices 1 and 2 are the two flanks the snake could turn into.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::modules::board::{Board, EMPTY, FOOD, Tag, WALL};
use crate::modules::snake::{Direction, Position, Snake};

/// Number of rays per depth ring.
pub const RAYS: usize = 5;
pub const DEFAULT_DEPTH: usize = 3;

pub const AHEAD: usize = 0;
pub const LEFT: usize = 1;
pub const RIGHT: usize = 2;
pub const AHEAD_LEFT: usize = 3;
pub const AHEAD_RIGHT: usize = 4;

/// How sampled tags are reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Reading {
    /// Tags exactly as stored on the board.
    Raw,
    /// Walls and every agent segment read as `WALL`.
    #[default]
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    pub depth: usize,
    pub reading: Reading,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            reading: Reading::default(),
        }
    }
}

impl VisionConfig {
    pub fn len(&self) -> usize {
        RAYS * self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Index of `ray` at `depth` (1-based) in the output.
    pub fn index(&self, ray: usize, depth: usize) -> usize {
        (depth - 1) * RAYS + ray
    }
}

fn ray_steps(heading: Direction) -> [(i32, i32); RAYS] {
    let (fx, fy) = heading.delta();
    let (lx, ly) = heading.left().delta();
    let (rx, ry) = heading.right().delta();
    [
        (fx, fy),
        (lx, ly),
        (rx, ry),
        (fx + lx, fy + ly),
        (fx + rx, fy + ry),
    ]
}

fn read(tag: Tag, reading: Reading) -> Tag {
    match reading {
        Reading::Raw => tag,
        Reading::Blocked => match tag {
            EMPTY | FOOD => tag,
            _ => WALL,
        },
    }
}

/// Samples the board around a head facing `heading`.
pub fn look(board: &Board, head: Position, heading: Direction, config: &VisionConfig) -> Vec<Tag> {
    let steps = ray_steps(heading);
    let mut out = Vec::with_capacity(config.len());
    for depth in 1..=config.depth as i32 {
        for (dx, dy) in steps {
            let cell = head.offset(dx * depth, dy * depth);
            out.push(read(board.get(cell), config.reading));
        }
    }
    out
}

/// Vision of `snake`; a snake without a heading is treated as facing east.
pub fn vision(board: &Board, snake: &Snake, config: &VisionConfig) -> Vec<Tag> {
    let heading = snake.direction().unwrap_or(Direction::East);
    look(board, snake.head(), heading, config)
}
