use std::collections::VecDeque;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modules::board::{Board, EMPTY, Tag};

/// Shortest body a living snake can have.
pub const MIN_LEN: usize = 2;

/// Random draws tried before spawning falls back to scanning the board.
const SPAWN_ATTEMPTS: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub const fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Heading on the board; north is towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub const fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Body of one agent, tail at the front and head at the back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        Self {
            body: positions.into_iter().collect(),
        }
    }

    /// Places a fresh two-cell snake on a random free horizontal pair, facing east.
    ///
    /// Returns `None` only when no free pair is left anywhere on the board.
    pub fn spawn<R: Rng + ?Sized>(board: &mut Board, tag: Tag, rng: &mut R) -> Option<Self> {
        if board.interior() == 0 {
            return None;
        }
        let chosen = {
            let grid: &Board = board;
            let fits =
                |tail: Position| grid.get(tail) == EMPTY && grid.get(tail.offset(1, 0)) == EMPTY;
            let drawn = (0..SPAWN_ATTEMPTS)
                .map(|_| grid.random_interior(&mut *rng))
                .find(|&tail| fits(tail));
            drawn.or_else(|| {
                let free: Vec<Position> = grid.positions_of(EMPTY).filter(|&t| fits(t)).collect();
                (!free.is_empty()).then(|| free[rng.gen_range(0..free.len())])
            })
        };

        let tail = chosen?;
        let head = tail.offset(1, 0);
        board.set(tail, tag);
        board.set(head, tag);
        Some(Self::from_positions([tail, head]))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Position {
        self.body.back().copied().unwrap_or_default()
    }

    pub fn tail(&self) -> Position {
        self.body.front().copied().unwrap_or_default()
    }

    /// Segment right behind the head.
    pub fn neck(&self) -> Position {
        if self.body.len() < 2 {
            return Position::origin();
        }
        self.body[self.body.len() - 2]
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn direction(&self) -> Option<Direction> {
        if self.body.len() < 2 {
            return None;
        }
        let head = self.head();
        let neck = self.neck();
        let dir = if head.x == neck.x {
            if head.y > neck.y {
                Direction::South
            } else {
                Direction::North
            }
        } else if head.x > neck.x {
            Direction::East
        } else {
            Direction::West
        };
        Some(dir)
    }

    /// Pushes a new head; the old tail is only dropped when the snake did not grow.
    pub fn move_to(&mut self, head: Position, grew: bool) -> Option<Position> {
        self.body.push_back(head);
        if grew {
            None
        } else {
            self.body.pop_front()
        }
    }

    /// Drops the oldest segment and returns it.
    pub fn shrink_tail(&mut self) -> Option<Position> {
        self.body.pop_front()
    }

    /// Drops the oldest segment; `true` means the snake is now too short to live.
    pub fn shrink(&mut self) -> bool {
        self.shrink_tail();
        self.body.len() < MIN_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn line(points: &[(i32, i32)]) -> Snake {
        Snake::from_positions(points.iter().map(|&(x, y)| Position::new(x, y)))
    }

    #[test]
    fn direction_follows_last_two_segments() {
        assert_eq!(line(&[(2, 2), (3, 2)]).direction(), Some(Direction::East));
        assert_eq!(line(&[(3, 2), (2, 2)]).direction(), Some(Direction::West));
        assert_eq!(line(&[(2, 3), (2, 2)]).direction(), Some(Direction::North));
        assert_eq!(line(&[(2, 2), (2, 3)]).direction(), Some(Direction::South));
        assert_eq!(line(&[(2, 2)]).direction(), None);
    }

    #[test]
    fn empty_snake_reports_origin() {
        let snake = Snake::default();
        assert_eq!(snake.head(), Position::origin());
        assert_eq!(snake.tail(), Position::origin());
        assert_eq!(snake.neck(), Position::origin());
    }

    #[test]
    fn move_without_food_keeps_length() {
        let mut snake = line(&[(1, 1), (2, 1)]);
        let freed = snake.move_to(Position::new(3, 1), false);
        assert_eq!(freed, Some(Position::new(1, 1)));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position::new(2, 1));
        assert_eq!(snake.head(), Position::new(3, 1));
    }

    #[test]
    fn move_onto_food_grows() {
        let mut snake = line(&[(1, 1), (2, 1)]);
        assert_eq!(snake.move_to(Position::new(3, 1), true), None);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position::new(1, 1));
    }

    #[test]
    fn shrink_reports_when_too_short() {
        let mut snake = line(&[(1, 1), (2, 1), (3, 1)]);
        assert!(!snake.shrink());
        assert_eq!(snake.len(), 2);
        assert!(snake.shrink());
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn turns_are_quarter_rotations() {
        for dir in Direction::ALL {
            assert_eq!(dir.left().right(), dir);
            assert_ne!(dir.left(), dir.right());
            let (dx, dy) = dir.delta();
            let (lx, ly) = dir.left().delta();
            assert_eq!(dx * lx + dy * ly, 0, "left of {} is not orthogonal", dir);
        }
    }

    #[test]
    fn spawn_stamps_a_horizontal_pair() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = Board::new(8, 8);
        let snake = Snake::spawn(&mut board, 2, &mut rng).expect("room to spawn");

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.direction(), Some(Direction::East));
        assert_eq!(snake.head(), snake.tail().offset(1, 0));
        assert_eq!(board.get(snake.head()), 2);
        assert_eq!(board.get(snake.tail()), 2);
        assert_eq!(board.count(2), 2);
    }

    #[test]
    fn spawn_gives_up_without_a_free_pair() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(5, 5);
        // leave only vertical gaps in the 3x3 interior
        for y in 1..4 {
            board.set(Position::new(2, y), 9);
        }
        assert!(Snake::spawn(&mut board, 2, &mut rng).is_none());
        assert_eq!(board.count(2), 0);

        let mut walled = Board::new(2, 6);
        assert!(Snake::spawn(&mut walled, 2, &mut rng).is_none());
    }
}
