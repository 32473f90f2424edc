//! Translation of raw terminal events into game intents.

pub mod handler;
pub mod swipe;

pub use handler::{InputAction, InputHandler};
pub use swipe::{SwipeTracker, swipe_direction};
