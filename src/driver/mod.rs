//! Fixed-cadence driver around the game engine.
//!
//! The driver owns the engine, turns elapsed frame time into ticks, and
//! forwards player intents. It knows nothing about terminals; the human
//! mode feeds it events and draws what it exposes.

pub mod clock;

use std::time::Duration;

use rand::Rng;
use rand::rngs::SmallRng;
use tracing::info;

pub use clock::{MAX_CATCH_UP_TICKS, TickClock};

use crate::game::{GameConfig, GameEngine, GameSnapshot, GameState, StepResult};
use crate::input::InputAction;
use crate::metrics::GameMetrics;

pub struct GameLoopDriver<R: Rng = SmallRng> {
    engine: GameEngine<R>,
    clock: TickClock,
    metrics: GameMetrics,
    paused: bool,
    /// Holding still until the first accepted turn after a reset
    awaiting_input: bool,
    should_quit: bool,
}

impl GameLoopDriver<SmallRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }
}

impl<R: Rng> GameLoopDriver<R> {
    pub fn with_engine(engine: GameEngine<R>) -> Self {
        let clock = TickClock::from_millis(engine.config().tick_interval_ms);
        let awaiting_input = engine.config().wait_for_input;
        Self {
            engine,
            clock,
            metrics: GameMetrics::new(),
            paused: false,
            awaiting_input,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut GameMetrics {
        &mut self.metrics
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_awaiting_input(&self) -> bool {
        self.awaiting_input
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Apply one player intent
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Turn(direction) => {
                if self.paused {
                    return;
                }
                if self.engine.set_direction(direction) && self.awaiting_input {
                    self.awaiting_input = false;
                    self.clock.reset();
                }
            }
            InputAction::Restart => self.restart(),
            InputAction::TogglePause => {
                if self.engine.is_terminated() {
                    return;
                }
                self.paused = !self.paused;
                self.clock.reset();
                self.metrics.set_paused(self.paused);
                info!(paused = self.paused, "pause toggled");
            }
            InputAction::Quit => self.should_quit = true,
            InputAction::None => {}
        }
    }

    /// Advance by `elapsed` wall time, running every tick that became due
    ///
    /// Returns the result of the last tick run, if any.
    pub fn update(&mut self, elapsed: Duration) -> Option<StepResult> {
        if self.paused || self.awaiting_input || self.engine.is_terminated() {
            return None;
        }

        let mut last = None;
        for _ in 0..self.clock.advance(elapsed) {
            let result = self.engine.tick();
            let final_score = result.game_over();
            last = Some(result);

            if let Some(score) = final_score {
                self.metrics.on_game_over(score);
                if self.engine.config().auto_restart {
                    self.restart();
                }
                break;
            }
        }
        last
    }

    /// Start a fresh game
    pub fn restart(&mut self) {
        self.engine.reset();
        self.clock.reset();
        self.paused = false;
        self.awaiting_input = self.engine.config().wait_for_input;
        self.metrics.on_game_start();
        info!(
            games_played = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "new game"
        );
    }
}
