//! Gomoku console game
//!
//! Play Go-Moku in the terminal against a computer that moves at random.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use gomoku::ui::Console;
use gomoku::{Game, GameConfig, RandomEngine, Stone};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gomoku", version, about = "Play Go-Moku against a random-move AI")]
struct Cli {
    /// TOML config file (defaults are used if it does not exist)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Board size (at least 5)
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,
    /// Seed for the AI's random moves
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before each AI move, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
    /// Play White and let the AI move first
    #[arg(long)]
    second: bool,
    /// Log game events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn load_config(&self) -> Result<GameConfig, gomoku::ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load_or_default(path)?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(delay_ms) = self.delay_ms {
            config.ai_delay_ms = delay_ms;
        }
        if self.second {
            config.human = Stone::White;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.load_config()?;
    info!(?config, "starting game");

    let game = Game::new(config.board_size)?;
    let engine = match config.seed {
        Some(seed) => RandomEngine::seeded(config.ai_stone(), seed),
        None => RandomEngine::from_entropy(config.ai_stone()),
    };

    let stdin = io::stdin();
    let mut console = Console::new(game, engine, stdin.lock(), io::stdout())
        .with_ai_delay(config.ai_delay());
    let outcome = console.run()?;
    info!(?outcome, "session over");
    Ok(())
}
