use std::sync::Mutex;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::modules::board::WALL;
use crate::modules::moves::{AgentId, Choice, Move};
use crate::modules::view::GameView;
use crate::modules::vision::{AHEAD, LEFT, RIGHT};

/// Anything that can steer a snake.
///
/// `decide` runs on worker threads while every other agent decides too, so it only
/// gets a shared reference to itself and a read-only view of the game. It has to
/// return within a bounded time.
pub trait Player: Send + Sync {
    fn decide(&self, view: &GameView<'_>) -> Move;

    fn assign_id(&mut self, id: AgentId);
}

/// Picks random scores, zeroing any turn that would run straight into something.
#[derive(Debug)]
pub struct RandomPlayer {
    id: AgentId,
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            id: 0,
            rng: Mutex::new(rng),
        }
    }
}

impl Player for RandomPlayer {
    fn decide(&self, view: &GameView<'_>) -> Move {
        let Ok(mut rng) = self.rng.lock() else {
            return Move::straight(self.id);
        };
        let seen = view.vision(self.id);
        let mut scores = [rng.r#gen::<f64>(), rng.r#gen::<f64>(), rng.r#gen::<f64>()];
        for (score, index) in scores.iter_mut().zip([LEFT, AHEAD, RIGHT]) {
            if seen.get(index).is_some_and(|&tag| tag >= WALL) {
                *score = 0.0;
            }
        }
        Move::new(self.id, scores)
    }

    fn assign_id(&mut self, id: AgentId) {
        self.id = id;
    }
}

/// Keyboard-driven player fed through a channel (`a` left, `w` straight, `d` right).
///
/// Waits at most one frame for a key and goes straight when none arrives.
#[derive(Debug)]
pub struct HumanPlayer {
    id: AgentId,
    input: Mutex<Receiver<char>>,
    framerate: Duration,
}

impl HumanPlayer {
    pub fn new(input: Receiver<char>, framerate: Duration) -> Self {
        Self {
            id: 0,
            input: Mutex::new(input),
            framerate,
        }
    }

    fn key_choice(key: char) -> Choice {
        match key.to_ascii_lowercase() {
            'a' => Choice::Left,
            'd' => Choice::Right,
            _ => Choice::Straight,
        }
    }
}

impl Player for HumanPlayer {
    fn decide(&self, _view: &GameView<'_>) -> Move {
        let key = self
            .input
            .lock()
            .ok()
            .and_then(|rx| rx.recv_timeout(self.framerate).ok());
        let choice = key.map(Self::key_choice).unwrap_or(Choice::Straight);
        Move::from_choice(self.id, choice)
    }

    fn assign_id(&mut self, id: AgentId) {
        self.id = id;
    }
}

/// Never turns.
#[derive(Debug, Default)]
pub struct StraightPlayer {
    id: AgentId,
}

impl Player for StraightPlayer {
    fn decide(&self, _view: &GameView<'_>) -> Move {
        Move::straight(self.id)
    }

    fn assign_id(&mut self, id: AgentId) {
        self.id = id;
    }
}
