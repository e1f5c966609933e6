use crate::modules::board::{Board, EMPTY};
use crate::modules::snake::{MIN_LEN, Snake};

/// Life lost on every move that does not end on food.
pub const HUNGER_DECREMENT: f64 = 0.02;
pub const FULL_LIFE: f64 = 1.0;

/// Outcome of one hunger step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hunger {
    /// Life went down but stayed positive.
    Fed,
    /// Life ran out and the snake lost its tail segment.
    Shrunk,
    /// Life ran out on a snake that could not lose another segment.
    Starved,
}

/// Applies one tick of hunger; starvation shrinkage frees the tail cell on `board`.
pub fn hunger(life: &mut f64, decrement: f64, snake: &mut Snake, board: &mut Board) -> Hunger {
    *life -= decrement;
    if *life > 0.0 {
        return Hunger::Fed;
    }

    *life = FULL_LIFE;
    if let Some(tail) = snake.shrink_tail() {
        board.set(tail, EMPTY);
    }
    if snake.len() < MIN_LEN {
        Hunger::Starved
    } else {
        Hunger::Shrunk
    }
}

/// Restores life after eating and bumps the length high-water mark.
pub fn feed(life: &mut f64, max_len: &mut usize, len: usize) {
    *life = FULL_LIFE;
    *max_len = (*max_len).max(len);
}

/// Normalised survival signal in `(0, 1]`.
///
/// Grows with the number of ticks left before starvation kills the snake: every
/// segment above the minimum is worth one full life bar.
pub fn vitality(len: usize, life: f64, max_len: usize) -> f64 {
    let spare = len.saturating_sub(MIN_LEN) as f64 + life.clamp(0.0, FULL_LIFE);
    let ceiling = max_len.max(len).saturating_sub(MIN_LEN) as f64 + FULL_LIFE;
    (spare / ceiling).clamp(0.0, 1.0)
}

/// Longest countdown reported for a single life bar.
const COUNTDOWN_CAP: u64 = 1 << 24;

/// Ticks until `life` drops to zero under the same subtraction [`hunger`] applies.
fn drain(mut life: f64, decrement: f64) -> u64 {
    let mut ticks = 0;
    loop {
        ticks += 1;
        life -= decrement;
        if life <= 0.0 || ticks >= COUNTDOWN_CAP {
            return ticks;
        }
    }
}

/// Ticks of plain movement left before a snake of `len` starves to death.
pub fn ticks_to_starvation(len: usize, life: f64, decrement: f64) -> u64 {
    if decrement.is_nan() || decrement <= 0.0 {
        return u64::MAX;
    }
    let per_bar = drain(FULL_LIFE, decrement);
    let spare = len.saturating_sub(MIN_LEN) as u64;
    drain(life, decrement).saturating_add(per_bar.saturating_mul(spare))
}
