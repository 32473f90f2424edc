//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine advances one cell per tick; drivers decide when to tick.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, ParseDirectionError};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use food::spawn_food;
pub use state::{CollisionType, GameSnapshot, GameState, Position, Snake};
