use std::fmt;

use serde::{Deserialize, Serialize};

use crate::modules::board::Tag;
use crate::modules::snake::{Direction, Position, Snake};

/// Identifier of an agent; equal to its board tag.
pub type AgentId = Tag;

/// Relative action an agent can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Left,
    Straight,
    Right,
}

impl Choice {
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Left => "left",
            Choice::Straight => "straight",
            Choice::Right => "right",
        }
    }

    /// One-hot score vector for this choice.
    pub const fn scores(self) -> [f64; 3] {
        match self {
            Choice::Left => [1.0, 0.0, 0.0],
            Choice::Straight => [0.0, 1.0, 0.0],
            Choice::Right => [0.0, 0.0, 1.0],
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One agent's scores for `[left, straight, right]` this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub id: AgentId,
    pub scores: Vec<f64>,
}

impl Move {
    pub fn new(id: AgentId, scores: impl Into<Vec<f64>>) -> Self {
        Self {
            id,
            scores: scores.into(),
        }
    }

    pub fn from_choice(id: AgentId, choice: Choice) -> Self {
        Self::new(id, choice.scores())
    }

    pub fn straight(id: AgentId) -> Self {
        Self::from_choice(id, Choice::Straight)
    }

    /// The strictly highest score wins. Ties, NaNs and malformed vectors go straight.
    pub fn choice(&self) -> Choice {
        let [left, straight, right] = match self.scores.as_slice() {
            &[l, s, r] => [l, s, r],
            _ => return Choice::Straight,
        };
        if left > straight && left > right {
            Choice::Left
        } else if right > straight && right > left {
            Choice::Right
        } else {
            Choice::Straight
        }
    }
}

impl Direction {
    pub const fn turn(self, choice: Choice) -> Self {
        match choice {
            Choice::Left => self.left(),
            Choice::Straight => self,
            Choice::Right => self.right(),
        }
    }
}

/// Cell the snake's head would enter for this move. Nothing is mutated.
pub fn resolve(snake: &Snake, mv: &Move) -> Position {
    let heading = snake.direction().unwrap_or(Direction::East);
    snake.head().step(heading.turn(mv.choice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_maximum_wins() {
        assert_eq!(Move::new(2, [0.9, 0.1, 0.2]).choice(), Choice::Left);
        assert_eq!(Move::new(2, [0.1, 0.9, 0.2]).choice(), Choice::Straight);
        assert_eq!(Move::new(2, [0.1, 0.2, 0.9]).choice(), Choice::Right);
    }

    #[test]
    fn ties_and_garbage_go_straight() {
        assert_eq!(Move::new(2, [0.5, 0.1, 0.5]).choice(), Choice::Straight);
        assert_eq!(Move::new(2, [0.3, 0.3, 0.3]).choice(), Choice::Straight);
        assert_eq!(Move::new(2, vec![1.0, 0.0]).choice(), Choice::Straight);
        assert_eq!(Move::new(2, vec![]).choice(), Choice::Straight);
        assert_eq!(
            Move::new(2, [f64::NAN, f64::NAN, f64::NAN]).choice(),
            Choice::Straight
        );
        assert_eq!(Move::new(2, [f64::NAN, 0.0, 1.0]).choice(), Choice::Straight);
    }

    #[test]
    fn resolve_is_relative_to_heading() {
        let east = Snake::from_positions([Position::new(4, 4), Position::new(5, 4)]);
        assert_eq!(resolve(&east, &Move::straight(2)), Position::new(6, 4));
        assert_eq!(
            resolve(&east, &Move::from_choice(2, Choice::Left)),
            Position::new(5, 3)
        );
        assert_eq!(
            resolve(&east, &Move::from_choice(2, Choice::Right)),
            Position::new(5, 5)
        );

        let north = Snake::from_positions([Position::new(4, 5), Position::new(4, 4)]);
        assert_eq!(resolve(&north, &Move::straight(2)), Position::new(4, 3));
        assert_eq!(
            resolve(&north, &Move::from_choice(2, Choice::Left)),
            Position::new(3, 4)
        );
        assert_eq!(
            resolve(&north, &Move::from_choice(2, Choice::Right)),
            Position::new(5, 4)
        );

        let south = Snake::from_positions([Position::new(4, 3), Position::new(4, 4)]);
        assert_eq!(
            resolve(&south, &Move::from_choice(2, Choice::Left)),
            Position::new(5, 4)
        );

        let west = Snake::from_positions([Position::new(5, 4), Position::new(4, 4)]);
        assert_eq!(
            resolve(&west, &Move::from_choice(2, Choice::Right)),
            Position::new(4, 3)
        );
    }

    #[test]
    fn never_reverses() {
        for choice in [Choice::Left, Choice::Straight, Choice::Right] {
            let snake = Snake::from_positions([Position::new(4, 4), Position::new(5, 4)]);
            assert_ne!(resolve(&snake, &Move::from_choice(2, choice)), snake.neck());
        }
    }
}
