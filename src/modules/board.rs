use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modules::snake::Position;

/// Per-cell marker stored on the board.
pub type Tag = i8;

pub const EMPTY: Tag = 0;
pub const WALL: Tag = 1;
pub const FOOD: Tag = -1;
/// Lowest tag handed out to an agent.
pub const FIRST_AGENT_TAG: Tag = 2;

/// Smallest playable board edge, border included.
pub const MIN_SIZE: usize = 5;

/// Random misses tolerated before food placement scans for the remaining free cells.
const FOOD_ATTEMPTS: usize = 64;

/// Fixed-size grid of cell tags with a permanent wall border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Tag>,
}

/// Row-major copy of the board handed to renderers and drivers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub height: usize,
    pub width: usize,
    pub rows: Vec<Vec<Tag>>,
}

impl Board {
    /// Builds a walled board. A zero side gives a board with no cells, which
    /// reads as wall everywhere and never accepts food.
    pub fn new(height: usize, width: usize) -> Self {
        let mut board = Self {
            height,
            width,
            cells: vec![EMPTY; height * width],
        };
        if board.cells.is_empty() {
            return board;
        }
        for x in 0..width {
            board.cells[x] = WALL;
            board.cells[(height - 1) * width + x] = WALL;
        }
        for y in 0..height {
            board.cells[y * width] = WALL;
            board.cells[y * width + width - 1] = WALL;
        }
        board
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells inside the wall ring.
    pub fn interior(&self) -> usize {
        self.height.saturating_sub(2) * self.width.saturating_sub(2)
    }

    fn index(&self, y: i32, x: i32) -> Option<usize> {
        if y < 0 || x < 0 {
            return None;
        }
        let (y, x) = (y as usize, x as usize);
        if y >= self.height || x >= self.width {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Tag at `(y, x)`; anything off the board reads as a wall.
    pub fn at(&self, y: i32, x: i32) -> Tag {
        self.index(y, x).map(|i| self.cells[i]).unwrap_or(WALL)
    }

    pub fn get(&self, pos: Position) -> Tag {
        self.at(pos.y, pos.x)
    }

    /// Writes are silently dropped outside the board.
    pub fn set(&mut self, pos: Position, tag: Tag) {
        if let Some(i) = self.index(pos.y, pos.x) {
            self.cells[i] = tag;
        }
    }

    pub fn count(&self, tag: Tag) -> usize {
        self.cells.iter().filter(|&&t| t == tag).count()
    }

    pub fn positions_of(&self, tag: Tag) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == tag)
            .map(|(i, _)| Position::new((i % self.width) as i32, (i / self.width) as i32))
    }

    /// # Panics
    ///
    /// When the board has no interior cell; check [`Board::interior`] first.
    pub fn random_interior<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.gen_range(1..self.width as i32 - 1),
            rng.gen_range(1..self.height as i32 - 1),
        )
    }

    /// Drops one food item on a uniformly chosen empty interior cell.
    pub fn place_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        if self.interior() == 0 {
            return None;
        }
        for _ in 0..FOOD_ATTEMPTS {
            let pos = self.random_interior(rng);
            if self.get(pos) == EMPTY {
                self.set(pos, FOOD);
                return Some(pos);
            }
        }

        let free: Vec<Position> = self.positions_of(EMPTY).collect();
        if free.is_empty() {
            return None;
        }
        let pos = free[rng.gen_range(0..free.len())];
        self.set(pos, FOOD);
        Some(pos)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tag]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            height: self.height,
            width: self.width,
            rows: self.rows().map(|r| r.to_vec()).collect(),
        }
    }
}

impl BoardSnapshot {
    pub fn at(&self, y: i32, x: i32) -> Tag {
        if y < 0 || x < 0 {
            return WALL;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(WALL)
    }
}
