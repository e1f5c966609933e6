use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::board::{Board, BoardSnapshot, Tag};
use crate::modules::game::Agent;
use crate::modules::life;
use crate::modules::moves::AgentId;
use crate::modules::snake::{Direction, Position};
use crate::modules::vision::{self, VisionConfig};

/// Read-only window on the game handed to every player while moves are collected.
///
/// Only shared references live in here, so nothing a player does through it can
/// touch the board or any snake.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    pub(crate) tick: u64,
    pub(crate) board: &'a Board,
    pub(crate) agents: &'a BTreeMap<AgentId, Agent>,
    pub(crate) vision: &'a VisionConfig,
    pub(crate) hunger_decrement: f64,
}

impl<'a> GameView<'a> {
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    pub fn vision_config(&self) -> &'a VisionConfig {
        self.vision
    }

    pub fn alive(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Egocentric vision of `id`; empty for unknown agents.
    pub fn vision(&self, id: AgentId) -> Vec<Tag> {
        self.agents
            .get(&id)
            .map(|a| vision::vision(self.board, &a.snake, self.vision))
            .unwrap_or_default()
    }

    pub fn life(&self, id: AgentId) -> Option<f64> {
        self.agents.get(&id).map(|a| a.life)
    }

    pub fn vitality(&self, id: AgentId) -> Option<f64> {
        self.agents
            .get(&id)
            .map(|a| life::vitality(a.snake.len(), a.life, a.max_len))
    }

    pub fn ticks_to_starvation(&self, id: AgentId) -> Option<u64> {
        self.agents
            .get(&id)
            .map(|a| life::ticks_to_starvation(a.snake.len(), a.life, self.hunger_decrement))
    }

    pub fn length(&self, id: AgentId) -> Option<usize> {
        self.agents.get(&id).map(|a| a.snake.len())
    }

    pub fn head(&self, id: AgentId) -> Option<Position> {
        self.agents.get(&id).map(|a| a.snake.head())
    }

    pub fn direction(&self, id: AgentId) -> Option<Direction> {
        self.agents.get(&id).and_then(|a| a.snake.direction())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub length: usize,
    pub max_len: usize,
    pub life: f64,
    pub head: Position,
    pub direction: Option<Direction>,
}

impl AgentSnapshot {
    pub(crate) fn of(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            length: agent.snake.len(),
            max_len: agent.max_len,
            life: agent.life,
            head: agent.snake.head(),
            direction: agent.snake.direction(),
        }
    }
}

/// Whole-game view for drivers and renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub game_over: bool,
    pub board: BoardSnapshot,
    pub agents: Vec<AgentSnapshot>,
}
