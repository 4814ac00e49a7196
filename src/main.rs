use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use grid_snake::game::SnakeGame;
use grid_snake::term::TermManager;
use grid_snake::{GameConfig, GameSession};

#[derive(Parser)]
#[command(name = "snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = grid_snake::config::COLUMNS)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = grid_snake::config::ROWS)]
    height: i32,

    /// Ticks per second
    #[arg(long, default_value_t = grid_snake::config::FPS)]
    fps: u32,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write a debug log here; the terminal is busy drawing the game
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), file).context("initializing logger")?;
    }

    let mut config = GameConfig::new(cli.width, cli.height);
    config.fps = cli.fps;
    config.seed = cli.seed;

    let session = GameSession::new(config).context("invalid game settings")?;
    let mut game = SnakeGame::new(session, TermManager::new()?)?;
    game.play()?;

    info!("bye");
    Ok(())
}
