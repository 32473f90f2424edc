use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::state::Position;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Terminal columns drawn per grid cell
    pub cell_size: u32,
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Milliseconds between simulation ticks
    pub tick_interval_ms: u64,
    /// Food items spawned per batch (1 for classic play)
    pub food_batch_size: usize,
    /// Cell the snake starts on after every reset
    pub start: Position,
    pub start_direction: Direction,
    /// Seed for food placement; random when unset
    pub seed: Option<u64>,
    /// Start a new game as soon as the previous one ends
    pub auto_restart: bool,
    /// Hold the snake still after a reset until a direction is pressed
    pub wait_for_input: bool,
    /// Minimum drag length, in cells, recognized as a swipe
    pub swipe_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 2,
            grid_width: 20,
            grid_height: 20,
            tick_interval_ms: 100,
            food_batch_size: 1,
            start: Position::new(9, 10),
            start_direction: Direction::Right,
            seed: None,
            auto_restart: false,
            wait_for_input: false,
            swipe_threshold: 2,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    ///
    /// The start cell is kept when it fits, otherwise moved to the center.
    pub fn new(width: usize, height: usize) -> Self {
        let mut config = Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        };
        config.fit_start();
        config
    }

    /// Move the start cell to the grid center if it falls outside the grid
    pub fn fit_start(&mut self) {
        if !self.start_in_bounds() {
            self.start = Position::new(
                (self.grid_width / 2) as i32,
                (self.grid_height / 2) as i32,
            );
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Variant mode: several food items on the board at once
    pub fn with_food_batch(mut self, batch: usize) -> Self {
        self.food_batch_size = batch;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    fn start_in_bounds(&self) -> bool {
        self.start.x >= 0
            && self.start.y >= 0
            && (self.start.x as usize) < self.grid_width
            && (self.start.y as usize) < self.grid_height
    }

    /// Reject settings the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if i32::try_from(self.grid_width).is_err() || i32::try_from(self.grid_height).is_err() {
            bail!("grid {}x{} is too large", self.grid_width, self.grid_height);
        }
        if !self.start_in_bounds() {
            bail!(
                "start cell ({}, {}) is outside the {}x{} grid",
                self.start.x,
                self.start.y,
                self.grid_width,
                self.grid_height
            );
        }
        if self.food_batch_size == 0 {
            bail!("food batch size must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            bail!("tick interval must be positive");
        }
        if self.cell_size == 0 {
            bail!("cell size must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.food_batch_size, 1);
        assert_eq!(config.start, Position::new(9, 10));
        assert_eq!(config.start_direction, Direction::Right);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.start, Position::new(9, 10));
    }

    #[test]
    fn test_small_grid_recenters_start() {
        let config = GameConfig::new(6, 4);
        assert_eq!(config.start, Position::new(3, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = GameConfig::small();
        config.grid_width = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.start = Position::new(10, 0);
        assert!(config.validate().is_err());

        let config = GameConfig::small().with_food_batch(0);
        assert!(config.validate().is_err());

        let mut config = GameConfig::small();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "grid_width": 12, "food_batch_size": 4, "start_direction": "up" }"#,
        )
        .unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.food_batch_size, 4);
        assert_eq!(config.start_direction, Direction::Up);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "grid_snake_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "seed": 7, "start": { "x": 1, "y": 2 } }"#).unwrap();

        let config = GameConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start, Position::new(1, 2));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GameConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
