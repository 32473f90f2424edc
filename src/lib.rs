//! Grid Snake - a tick-driven snake simulation with a terminal front-end
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - A fixed-cadence loop driver (driver module)
//! - Key and swipe translation (input module)
//! - TUI rendering of state snapshots (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
