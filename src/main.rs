use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grid_snake::game::{Direction, GameConfig, Position};
use grid_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a grid, played in the terminal")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Food items per batch (1 = classic)
    #[arg(long)]
    food: Option<usize>,

    /// Terminal columns per cell
    #[arg(long)]
    cell_size: Option<u32>,

    /// Starting column
    #[arg(long)]
    start_col: Option<i32>,

    /// Starting row
    #[arg(long)]
    start_row: Option<i32>,

    /// Starting direction (up, down, left, right)
    #[arg(long)]
    direction: Option<Direction>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Start a new game immediately after a collision
    #[arg(long)]
    auto_restart: bool,

    /// Keep the snake still until the first direction key
    #[arg(long)]
    wait_for_input: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(food) = self.food {
            config.food_batch_size = food;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        match (self.start_col, self.start_row) {
            // A resized grid may no longer contain the configured start.
            (None, None) => config.fit_start(),
            (col, row) => {
                config.start = Position::new(
                    col.unwrap_or(config.start.x),
                    row.unwrap_or(config.start.y),
                );
            }
        }
        if let Some(direction) = self.direction {
            config.start_direction = direction;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.auto_restart |= self.auto_restart;
        config.wait_for_input |= self.wait_for_input;

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

/// Route tracing output to a file; the terminal belongs to the game
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("Failed to install log subscriber: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
