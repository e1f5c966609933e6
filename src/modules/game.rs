use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::modules::board::{Board, BoardSnapshot, EMPTY, FIRST_AGENT_TAG, FOOD, Tag};
use crate::modules::config::GameConfig;
use crate::modules::error::GameError;
use crate::modules::life::{self, FULL_LIFE, Hunger};
use crate::modules::moves::{self, AgentId, Move};
use crate::modules::player::Player;
use crate::modules::snake::{MIN_LEN, Position, Snake};
use crate::modules::view::{AgentSnapshot, GameSnapshot, GameView};

/// Largest number of agents a single game can hold.
pub const MAX_AGENTS: usize = (Tag::MAX - FIRST_AGENT_TAG) as usize + 1;

/// One participant: a player steering a snake.
pub struct Agent {
    pub id: AgentId,
    pub snake: Snake,
    pub life: f64,
    pub max_len: usize,
    pub(crate) player: Box<dyn Player>,
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("snake", &self.snake)
            .field("life", &self.life)
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathReason {
    /// Ran into a wall or a snake; `with` is the tag that was hit.
    Collision { with: Tag },
    Starvation,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathReason::Collision { with } => write!(f, "collision with {}", with),
            DeathReason::Starvation => write!(f, "starvation"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    AgentMoved {
        agent_id: AgentId,
        from: Position,
        to: Position,
    },
    FoodEaten {
        agent_id: AgentId,
        at: Position,
        length: usize,
    },
    FoodSpawned {
        at: Position,
    },
    AgentShrunk {
        agent_id: AgentId,
        length: usize,
    },
    AgentDied {
        agent_id: AgentId,
        reason: DeathReason,
        length: usize,
    },
}

/// Outcome of one call to [`Game::play_round`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub tick: u64,
    pub game_over: bool,
    pub board: BoardSnapshot,
    pub events: Vec<Event>,
}

impl Round {
    pub fn deaths(&self) -> impl Iterator<Item = (AgentId, DeathReason)> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::AgentDied {
                agent_id, reason, ..
            } => Some((*agent_id, *reason)),
            _ => None,
        })
    }
}

/// The board, the agents on it and the tick protocol that moves them.
///
/// Each call to [`Game::play_round`] asks every player for a move in parallel
/// against a frozen [`GameView`], then applies the moves one by one in
/// ascending agent id order. When two heads go for the same free cell the
/// lower id claims it and the other one dies running into it.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    agents: BTreeMap<AgentId, Agent>,
    rng: StdRng,
    tick: u64,
    over: bool,
    missing_food: usize,
}

impl Game {
    pub fn new(
        height: usize,
        width: usize,
        players: Vec<Box<dyn Player>>,
        food: usize,
    ) -> Result<Self, GameError> {
        Self::with_config(GameConfig::sized(height, width, food), players)
    }

    pub fn with_config(
        config: GameConfig,
        players: Vec<Box<dyn Player>>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if players.len() > MAX_AGENTS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_AGENTS,
            });
        }

        let mut board = Board::new(config.height, config.width);
        let needed = players.len() * MIN_LEN + config.food;
        let available = board.interior();
        if needed > available {
            return Err(GameError::Crowded { needed, available });
        }

        let mut rng = config.rng();
        let mut agents = BTreeMap::new();
        for (index, mut player) in players.into_iter().enumerate() {
            let id = FIRST_AGENT_TAG + index as Tag;
            let snake =
                Snake::spawn(&mut board, id, &mut rng).ok_or(GameError::NoSpawnRoom { id })?;
            player.assign_id(id);
            agents.insert(
                id,
                Agent {
                    id,
                    life: FULL_LIFE,
                    max_len: snake.len(),
                    snake,
                    player,
                },
            );
        }

        for placed in 0..config.food {
            board.place_food(&mut rng).ok_or(GameError::NoFoodRoom {
                placed,
                wanted: config.food,
            })?;
        }

        info!(
            height = config.height,
            width = config.width,
            agents = agents.len(),
            food = config.food,
            "game created"
        );

        Ok(Self {
            config,
            board,
            agents,
            rng,
            tick: 0,
            over: false,
            missing_food: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values()
    }

    pub fn alive(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Body length of `id`, zero once it is gone.
    pub fn length(&self, id: AgentId) -> usize {
        self.agents.get(&id).map(|a| a.snake.len()).unwrap_or(0)
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            tick: self.tick,
            board: &self.board,
            agents: &self.agents,
            vision: &self.config.vision,
            hunger_decrement: self.config.hunger_decrement,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            tick: self.tick,
            game_over: self.over,
            board: self.board.snapshot(),
            agents: self.agents.values().map(AgentSnapshot::of).collect(),
        }
    }

    /// Runs one full tick. Once the game is over this only reports the final board.
    pub fn play_round(&mut self) -> Round {
        if self.over || self.agents.is_empty() {
            self.over = true;
            return self.round(Vec::new());
        }

        self.tick += 1;
        let decisions = self.collect_moves();

        let mut events = Vec::new();
        let mut dead: BTreeMap<AgentId, DeathReason> = BTreeMap::new();
        for (id, mv) in decisions {
            if dead.contains_key(&id) || !self.agents.contains_key(&id) {
                trace!(agent_id = id, "discarding move of departed agent");
                continue;
            }
            if let Some(reason) = self.apply_move(id, &mv, &mut events) {
                dead.insert(id, reason);
            }
        }

        self.bury(dead, &mut events);
        self.replenish_food(&mut events);

        if self.agents.is_empty() {
            self.over = true;
            info!(tick = self.tick, "game over");
        }
        self.round(events)
    }

    fn round(&self, events: Vec<Event>) -> Round {
        Round {
            tick: self.tick,
            game_over: self.over,
            board: self.board.snapshot(),
            events,
        }
    }

    /// Asks every player for a move at once; the board is frozen until all are back.
    fn collect_moves(&self) -> Vec<(AgentId, Move)> {
        let view = self.view();
        let agents: Vec<&Agent> = self.agents.values().collect();
        let mut decisions: Vec<(AgentId, Move)> = agents
            .par_iter()
            .map(|agent| {
                let mv = agent.player.decide(&view);
                if mv.id != agent.id {
                    warn!(agent_id = agent.id, claimed = mv.id, "player answered for another id");
                }
                (agent.id, mv)
            })
            .collect();
        decisions.sort_by_key(|(id, _)| *id);
        decisions
    }

    /// Applies one move; returns why the agent died, if it did.
    fn apply_move(
        &mut self,
        id: AgentId,
        mv: &Move,
        events: &mut Vec<Event>,
    ) -> Option<DeathReason> {
        let agent = self.agents.get_mut(&id)?;
        let from = agent.snake.head();
        let target = moves::resolve(&agent.snake, mv);

        match self.board.get(target) {
            FOOD => {
                agent.snake.move_to(target, true);
                self.board.set(target, id);
                life::feed(&mut agent.life, &mut agent.max_len, agent.snake.len());
                trace!(agent_id = id, %target, length = agent.snake.len(), "ate");
                events.push(Event::FoodEaten {
                    agent_id: id,
                    at: target,
                    length: agent.snake.len(),
                });
                match self.board.place_food(&mut self.rng) {
                    Some(at) => events.push(Event::FoodSpawned { at }),
                    None => self.missing_food += 1,
                }
                None
            }
            EMPTY => {
                if let Some(tail) = agent.snake.move_to(target, false) {
                    self.board.set(tail, EMPTY);
                }
                self.board.set(target, id);
                trace!(agent_id = id, %from, %target, "moved");
                events.push(Event::AgentMoved {
                    agent_id: id,
                    from,
                    to: target,
                });

                let decrement = self.config.hunger_decrement;
                match life::hunger(&mut agent.life, decrement, &mut agent.snake, &mut self.board) {
                    Hunger::Fed => None,
                    Hunger::Shrunk => {
                        debug!(agent_id = id, length = agent.snake.len(), "starving");
                        events.push(Event::AgentShrunk {
                            agent_id: id,
                            length: agent.snake.len(),
                        });
                        None
                    }
                    Hunger::Starved => Some(DeathReason::Starvation),
                }
            }
            with => Some(DeathReason::Collision { with }),
        }
    }

    /// Clears every cell still held by the dead and drops them from the game.
    fn bury(&mut self, dead: BTreeMap<AgentId, DeathReason>, events: &mut Vec<Event>) {
        for (id, reason) in dead {
            let Some(agent) = self.agents.remove(&id) else {
                continue;
            };
            for pos in agent.snake.positions() {
                if self.board.get(*pos) == id {
                    self.board.set(*pos, EMPTY);
                }
            }
            debug!(agent_id = id, %reason, length = agent.snake.len(), "agent died");
            events.push(Event::AgentDied {
                agent_id: id,
                reason,
                length: agent.snake.len(),
            });
        }
    }

    /// Retries food that had nowhere to go when it was eaten.
    fn replenish_food(&mut self, events: &mut Vec<Event>) {
        while self.missing_food > 0 {
            let Some(at) = self.board.place_food(&mut self.rng) else {
                break;
            };
            self.missing_food -= 1;
            events.push(Event::FoodSpawned { at });
        }
    }
}

#[cfg(test)]
impl Game {
    /// Moves agent `id` onto `cells` (tail first) and stamps the board to match.
    pub(crate) fn place_agent(&mut self, id: AgentId, cells: &[Position]) {
        let agent = self.agents.get_mut(&id).expect("agent exists");
        for pos in agent.snake.positions() {
            self.board.set(*pos, EMPTY);
        }
        agent.snake = Snake::from_positions(cells.iter().copied());
        agent.max_len = agent.max_len.max(cells.len());
        for pos in cells {
            self.board.set(*pos, id);
        }
    }

    pub(crate) fn set_cell(&mut self, pos: Position, tag: Tag) {
        self.board.set(pos, tag);
    }

    pub(crate) fn set_life(&mut self, id: AgentId, life: f64) {
        if let Some(agent) = self.agents.get_mut(&id) {
            agent.life = life;
        }
    }

    pub(crate) fn clear_food(&mut self) {
        let food: Vec<Position> = self.board.positions_of(FOOD).collect();
        for pos in food {
            self.board.set(pos, EMPTY);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::modules::board::WALL;
    use crate::modules::moves::Choice;
    use crate::modules::player::{RandomPlayer, StraightPlayer};
    use crate::modules::snake::Direction;

    /// Plays a fixed list of choices, then keeps going straight.
    struct Scripted {
        id: AgentId,
        script: Mutex<Vec<Choice>>,
    }

    impl Scripted {
        fn boxed(choices: &[Choice]) -> Box<dyn Player> {
            let mut script = choices.to_vec();
            script.reverse();
            Box::new(Self {
                id: 0,
                script: Mutex::new(script),
            })
        }
    }

    impl Player for Scripted {
        fn decide(&self, _view: &GameView<'_>) -> Move {
            let choice = self
                .script
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Choice::Straight);
            Move::from_choice(self.id, choice)
        }

        fn assign_id(&mut self, id: AgentId) {
            self.id = id;
        }
    }

    /// Answers with a malformed score vector.
    struct Broken(AgentId);

    impl Player for Broken {
        fn decide(&self, _view: &GameView<'_>) -> Move {
            Move::new(self.0, vec![f64::NAN, 7.0])
        }

        fn assign_id(&mut self, id: AgentId) {
            self.0 = id;
        }
    }

    fn straight_players(n: usize) -> Vec<Box<dyn Player>> {
        (0..n)
            .map(|_| Box::new(StraightPlayer::default()) as Box<dyn Player>)
            .collect()
    }

    fn seeded(height: usize, width: usize, food: usize, players: Vec<Box<dyn Player>>) -> Game {
        let config = GameConfig::sized(height, width, food).with_seed(17);
        Game::with_config(config, players).unwrap()
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Every agent tag on the board belongs to exactly one body cell and vice versa.
    fn assert_consistent(game: &Game) {
        let mut seen: HashMap<Position, AgentId> = HashMap::new();
        for agent in game.agents() {
            assert!(agent.snake.len() >= MIN_LEN, "agent {} too short", agent.id);
            for pos in agent.snake.positions() {
                assert_eq!(game.board().get(*pos), agent.id, "body cell {} untagged", pos);
                assert!(seen.insert(*pos, agent.id).is_none(), "cell {} shared", pos);
            }
        }
        for (y, row) in game.board().rows().enumerate() {
            for (x, tag) in row.iter().enumerate() {
                if *tag >= FIRST_AGENT_TAG {
                    let pos = p(x as i32, y as i32);
                    assert_eq!(seen.get(&pos), Some(tag), "stray tag {} at {}", tag, pos);
                }
            }
        }
    }

    #[test]
    fn construction_assigns_ids_and_places_everything() {
        let game = seeded(12, 12, 4, straight_players(3));
        let ids: Vec<AgentId> = game.agents().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        for agent in game.agents() {
            assert_eq!(agent.snake.len(), 2);
            assert_eq!(agent.snake.direction(), Some(Direction::East));
            assert_eq!(agent.life, FULL_LIFE);
        }
        assert_eq!(game.board().count(FOOD), 4);
        assert_consistent(&game);
    }

    #[test]
    fn construction_rejects_small_or_crowded_boards() {
        assert!(matches!(
            Game::new(4, 20, straight_players(1), 1),
            Err(GameError::BoardTooSmall { .. })
        ));
        assert!(matches!(
            Game::new(5, 5, straight_players(4), 2),
            Err(GameError::Crowded { .. })
        ));
    }

    #[test]
    fn construction_caps_the_number_of_players() {
        assert_eq!(
            Game::new(20, 20, straight_players(MAX_AGENTS + 1), 0).unwrap_err(),
            GameError::TooManyPlayers {
                count: MAX_AGENTS + 1,
                max: MAX_AGENTS,
            }
        );

        let game = seeded(40, 40, 0, straight_players(MAX_AGENTS));
        assert_eq!(game.agents().count(), MAX_AGENTS);
        assert_eq!(game.agents().last().map(|a| a.id), Some(Tag::MAX));
        assert_consistent(&game);
    }

    #[test]
    fn construction_reports_missing_spawn_pairs() {
        // a 3x3 interior fits eight cells but only three horizontal pairs
        assert_eq!(
            Game::new(5, 5, straight_players(4), 0).unwrap_err(),
            GameError::NoSpawnRoom { id: 5 }
        );
    }

    #[test]
    fn empty_game_is_over_immediately() {
        let mut game = Game::new(6, 6, Vec::new(), 1).unwrap();
        let round = game.play_round();
        assert!(round.game_over);
        assert_eq!(round.tick, 0);
    }

    #[test]
    fn straight_runner_survives_until_the_wall() {
        let mut game = seeded(20, 20, 0, straight_players(1));
        game.place_agent(2, &[p(2, 5), p(3, 5)]);

        // head at x=3 moves east; the wall sits at x=19
        for tick in 1..=15 {
            let round = game.play_round();
            assert!(!round.game_over, "died early at tick {}", tick);
            assert_eq!(game.agent(2).unwrap().snake.head(), p(3 + tick as i32, 5));
            assert_consistent(&game);
        }
        let round = game.play_round();
        assert!(round.game_over);
        assert!(!game.alive(2));
        assert_eq!(game.length(2), 0);
        assert_eq!(
            round.deaths().collect::<Vec<_>>(),
            vec![(2, DeathReason::Collision { with: crate::modules::board::WALL })]
        );
        assert_eq!(game.board().count(2), 0);
    }

    #[test]
    fn eating_grows_restores_life_and_keeps_food_count() {
        let mut game = seeded(20, 20, 3, straight_players(1));
        game.clear_food();
        game.place_agent(2, &[p(2, 5), p(3, 5)]);
        game.set_cell(p(4, 5), FOOD);
        game.set_cell(p(10, 10), FOOD);
        game.set_cell(p(12, 12), FOOD);
        game.set_life(2, 0.4);

        let round = game.play_round();
        let agent = game.agent(2).unwrap();
        assert_eq!(agent.snake.len(), 3);
        assert_eq!(agent.snake.head(), p(4, 5));
        assert_eq!(agent.snake.tail(), p(2, 5));
        assert_eq!(agent.life, FULL_LIFE);
        assert_eq!(agent.max_len, 3);
        assert_eq!(game.board().count(FOOD), 3);
        assert!(round
            .events
            .iter()
            .any(|e| matches!(e, Event::FoodEaten { agent_id: 2, length: 3, .. })));
        assert_consistent(&game);
    }

    #[test]
    fn hunger_shrinks_then_starves() {
        let mut game = seeded(30, 30, 0, straight_players(1));
        game.place_agent(2, &[p(2, 5), p(3, 5), p(4, 5)]);

        game.set_life(2, 0.01);
        let round = game.play_round();
        let agent = game.agent(2).unwrap();
        assert_eq!(agent.snake.len(), 2);
        assert_eq!(agent.life, FULL_LIFE);
        assert!(round
            .events
            .iter()
            .any(|e| matches!(e, Event::AgentShrunk { agent_id: 2, length: 2 })));
        assert_consistent(&game);

        game.set_life(2, 0.01);
        let round = game.play_round();
        assert!(round.game_over);
        assert_eq!(
            round.deaths().collect::<Vec<_>>(),
            vec![(2, DeathReason::Starvation)]
        );
        assert_eq!(game.board().count(2), 0);
    }

    #[test]
    fn life_drains_by_the_configured_decrement() {
        let mut game = seeded(20, 20, 0, straight_players(1));
        game.place_agent(2, &[p(2, 5), p(3, 5)]);
        game.play_round();
        game.play_round();
        let life = game.agent(2).unwrap().life;
        assert!((life - (1.0 - 2.0 * game.config().hunger_decrement)).abs() < 1e-9);
    }

    #[test]
    fn running_into_own_body_kills() {
        let players = vec![Scripted::boxed(&[Choice::Right])];
        let mut game = seeded(12, 12, 0, players);
        // facing north with the body curling round to the east of the head
        game.place_agent(2, &[p(6, 4), p(6, 5), p(5, 5), p(5, 4)]);
        let round = game.play_round();
        assert_eq!(
            round.deaths().collect::<Vec<_>>(),
            vec![(2, DeathReason::Collision { with: 2 })]
        );
        assert_eq!(game.board().count(2), 0);
    }

    #[test]
    fn running_into_another_snake_kills_only_the_mover() {
        let mut game = seeded(12, 12, 0, straight_players(2));
        game.place_agent(2, &[p(2, 3), p(3, 3)]);
        game.place_agent(3, &[p(4, 2), p(4, 3), p(4, 4)]);
        // 2 heads east into the middle of 3, which is heading south into open space
        let round = game.play_round();
        assert_eq!(
            round.deaths().collect::<Vec<_>>(),
            vec![(2, DeathReason::Collision { with: 3 })]
        );
        assert!(game.alive(3));
        assert_eq!(game.board().count(2), 0);
        assert_consistent(&game);
    }

    #[test]
    fn two_heads_into_one_cell_leave_one_survivor() {
        let mut game = seeded(12, 12, 0, straight_players(2));
        // both aim at (5, 5): 2 from the west, 3 from the east
        game.place_agent(2, &[p(3, 5), p(4, 5)]);
        game.place_agent(3, &[p(7, 5), p(6, 5)]);
        let round = game.play_round();

        let deaths: Vec<_> = round.deaths().collect();
        assert_eq!(deaths.len(), 1);
        assert!(game.alive(2) ^ game.alive(3));
        let survivor = if game.alive(2) { 2 } else { 3 };
        assert_eq!(game.board().get(p(5, 5)), survivor);
        assert!(!round.game_over);
        assert_consistent(&game);
    }

    #[test]
    fn malformed_decisions_go_straight() {
        let players: Vec<Box<dyn Player>> = vec![Box::new(Broken(0))];
        let mut game = seeded(12, 12, 0, players);
        game.place_agent(2, &[p(2, 5), p(3, 5)]);
        let round = game.play_round();
        assert!(!round.game_over);
        assert_eq!(game.agent(2).unwrap().snake.head(), p(4, 5));
    }

    #[test]
    fn eaten_food_waits_for_room_and_returns_on_death() {
        let mut game = seeded(5, 5, 1, straight_players(1));
        game.clear_food();
        // serpentine through the 3x3 interior, head at (2, 1) facing east
        game.place_agent(
            2,
            &[
                p(1, 3),
                p(2, 3),
                p(3, 3),
                p(3, 2),
                p(2, 2),
                p(1, 2),
                p(1, 1),
                p(2, 1),
            ],
        );
        game.set_cell(p(3, 1), FOOD);

        let round = game.play_round();
        assert!(round.deaths().next().is_none());
        assert_eq!(game.length(2), 9);
        assert_eq!(game.board().count(FOOD), 0);
        assert_eq!(game.board().count(EMPTY), 0);
        assert!(
            !round
                .events
                .iter()
                .any(|e| matches!(e, Event::FoodSpawned { .. }))
        );
        assert_consistent(&game);

        let round = game.play_round();
        assert!(round.game_over);
        assert_eq!(
            round.deaths().collect::<Vec<_>>(),
            vec![(2, DeathReason::Collision { with: WALL })]
        );
        assert_eq!(game.board().count(FOOD), 1);
        assert!(
            round
                .events
                .iter()
                .any(|e| matches!(e, Event::FoodSpawned { .. }))
        );
    }

    #[test]
    fn finished_games_stay_finished() {
        let mut game = seeded(6, 6, 0, straight_players(1));
        game.place_agent(2, &[p(3, 2), p(4, 2)]);
        assert!(game.play_round().game_over);
        let tick = game.tick();
        let again = game.play_round();
        assert!(again.game_over);
        assert!(again.events.is_empty());
        assert_eq!(game.tick(), tick);
    }

    #[test]
    fn random_games_keep_board_and_bodies_in_sync() {
        let players: Vec<Box<dyn Player>> = (0..6)
            .map(|i| Box::new(RandomPlayer::new(Some(100 + i))) as Box<dyn Player>)
            .collect();
        let mut game = seeded(18, 18, 5, players);
        for _ in 0..300 {
            let round = game.play_round();
            assert_consistent(&game);
            if round.game_over {
                break;
            }
            assert_eq!(game.board().count(FOOD), 5);
        }
    }

    #[test]
    fn view_exposes_per_agent_state() {
        let mut game = seeded(12, 12, 0, straight_players(1));
        game.place_agent(2, &[p(2, 5), p(3, 5), p(4, 5)]);
        game.set_life(2, 0.5);
        let view = game.view();
        assert_eq!(view.length(2), Some(3));
        assert_eq!(view.life(2), Some(0.5));
        assert_eq!(view.direction(2), Some(Direction::East));
        assert_eq!(view.vision(2).len(), game.config().vision.len());
        assert!(view.vitality(2).unwrap() > 0.0);
        assert_eq!(view.life(9), None);
        assert!(view.vision(9).is_empty());
    }
}
