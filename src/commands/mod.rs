use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use snake_arena::{
    AgentId, DeathReason, Event, Game, GameConfig, HumanPlayer, Player, RandomPlayer, Reading,
    Round, load_config,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

use render::render;

#[derive(Parser)]
#[command(
    name = "snake-arena",
    version,
    about = "Multi-agent snake arena (random and keyboard players, one tick at a time)",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a battle royale until every snake is dead or the tick budget runs out
    Run {
        #[command(flatten)]
        game: GameArgs,
        /// Number of random players
        #[arg(short = 'p', long, default_value_t = 4)]
        players: usize,
        /// Add a keyboard player (type a/w/d + enter for left/straight/right)
        #[arg(long, default_value_t = false)]
        human: bool,
        /// Number of ticks to run (omit to play until the game is over)
        #[arg(short = 't', long)]
        ticks: Option<u64>,
        /// Delay between ticks in milliseconds; also the keyboard player's frame budget
        #[arg(short = 'd', long, default_value_t = 100)]
        delay_ms: u64,
        /// Print each round as JSON instead of drawing the board
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Only print the final summary
        #[arg(short = 'q', long, default_value_t = false)]
        quiet: bool,
    },
    /// Print the effective game configuration as JSON
    Config {
        #[command(flatten)]
        game: GameArgs,
    },
}

/// Board and rules shared by every subcommand; flags override the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct GameArgs {
    /// JSON config file to start from
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    width: Option<usize>,
    /// Food items kept on the board
    #[arg(long)]
    food: Option<usize>,
    /// Life lost per move without food
    #[arg(long)]
    hunger: Option<f64>,
    /// How far each vision ray reaches
    #[arg(long)]
    vision_depth: Option<usize>,
    /// raw keeps board tags, blocked folds walls and bodies together
    #[arg(long, value_enum)]
    reading: Option<Reading>,
    /// RNG seed for reproducible placement and random players
    #[arg(short = 's', long)]
    seed: Option<u64>,
}

impl GameArgs {
    fn resolve(&self) -> Result<GameConfig, String> {
        let mut config = match &self.config {
            Some(path) => load_config(path).map_err(|e| e.to_string())?,
            None => GameConfig::default(),
        };
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(food) = self.food {
            config.food = food;
        }
        if let Some(hunger) = self.hunger {
            config.hunger_decrement = hunger;
        }
        if let Some(depth) = self.vision_depth {
            config.vision.depth = depth;
        }
        if let Some(reading) = self.reading {
            config.vision.reading = reading;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn dispatch(command: Command) -> Result<(), String> {
    match command {
        Command::Run {
            game,
            players,
            human,
            ticks,
            delay_ms,
            json,
            quiet,
        } => run_game(game.resolve()?, players, human, ticks, delay_ms, json, quiet),
        Command::Config { game } => {
            let config = game.resolve()?;
            let json = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn build_players(
    config: &GameConfig,
    random: usize,
    human: bool,
    frame: Duration,
) -> Vec<Box<dyn Player>> {
    let mut players: Vec<Box<dyn Player>> = Vec::with_capacity(random + 1);
    if human {
        players.push(Box::new(HumanPlayer::new(spawn_keyboard(), frame)));
    }
    for i in 0..random {
        let seed = config.seed.map(|s| s.wrapping_add(i as u64 + 1));
        players.push(Box::new(RandomPlayer::new(seed)));
    }
    players
}

/// Forwards the first character of every stdin line to the keyboard player.
fn spawn_keyboard() -> mpsc::Receiver<char> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(key) = line.trim().chars().next() {
                if tx.send(key).is_err() {
                    break;
                }
            }
        }
    });
    rx
}

fn run_game(
    config: GameConfig,
    random: usize,
    human: bool,
    ticks: Option<u64>,
    delay_ms: u64,
    json: bool,
    quiet: bool,
) -> Result<(), String> {
    let delay = Duration::from_millis(delay_ms);
    let players = build_players(&config, random, human, delay.max(Duration::from_millis(1)));
    let mut game = Game::with_config(config, players).map_err(|e| e.to_string())?;
    let mut records: BTreeMap<AgentId, Record> = game
        .agents()
        .map(|a| (a.id, Record::new(a.snake.len())))
        .collect();

    if !quiet && !json {
        print!("{}", render(&game.board().snapshot()));
    }

    let mut remaining = ticks;
    loop {
        if remaining == Some(0) {
            break;
        }
        let round = game.play_round();
        track(&mut records, &round);

        if json {
            let line = serde_json::to_string(&round).map_err(|e| e.to_string())?;
            println!("{}", line);
        } else if !quiet {
            print_round(&round, &game);
        }

        if round.game_over {
            break;
        }
        if let Some(n) = remaining.as_mut() {
            *n -= 1;
        }
        if delay > Duration::ZERO && !human {
            thread::sleep(delay);
        }
    }

    info!(tick = game.tick(), over = game.is_over(), "run finished");
    print_summary(&game, &records);
    Ok(())
}

#[derive(Debug, Clone)]
struct Record {
    best: usize,
    death: Option<(u64, DeathReason)>,
}

impl Record {
    fn new(len: usize) -> Self {
        Self {
            best: len,
            death: None,
        }
    }
}

fn track(records: &mut BTreeMap<AgentId, Record>, round: &Round) {
    for event in &round.events {
        match event {
            Event::FoodEaten {
                agent_id, length, ..
            } => {
                if let Some(record) = records.get_mut(agent_id) {
                    record.best = record.best.max(*length);
                }
            }
            Event::AgentDied {
                agent_id, reason, ..
            } => {
                if let Some(record) = records.get_mut(agent_id) {
                    record.death = Some((round.tick, *reason));
                }
            }
            _ => {}
        }
    }
}

fn print_round(round: &Round, game: &Game) {
    println!("Tick {}", round.tick);
    print!("{}", render(&round.board));
    for (agent_id, reason) in round.deaths() {
        println!(" - snake {} died ({})", render::glyph(agent_id), reason);
    }
    let status: Vec<String> = game
        .agents()
        .map(|a| format!("{}:len={} life={:.2}", render::glyph(a.id), a.snake.len(), a.life))
        .collect();
    if !status.is_empty() {
        println!("{}", status.join(" | "));
    }
}

fn print_summary(game: &Game, records: &BTreeMap<AgentId, Record>) {
    println!(
        "Summary after {} ticks ({} alive):",
        game.tick(),
        game.agents().count()
    );
    for (id, record) in records {
        let fate = match record.death {
            Some((tick, reason)) => format!("died at tick {} ({})", tick, reason),
            None => format!("alive with length {}", game.length(*id)),
        };
        println!(
            " - snake {} (#{}) best length {} | {}",
            render::glyph(*id),
            id,
            record.best,
            fate
        );
    }
}
