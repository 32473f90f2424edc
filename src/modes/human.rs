use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::driver::GameLoopDriver;
use crate::game::GameConfig;
use crate::input::{InputAction, InputHandler};
use crate::render::{Overlay, Renderer};

/// Frame cadence; game ticks are gated by the driver's accumulator
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Keyboard/mouse play in the terminal
pub struct HumanMode {
    driver: GameLoopDriver,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        let renderer = Renderer::with_cell_width(config.cell_size);
        let input_handler = InputHandler::from_config(&config);

        Self {
            driver: GameLoopDriver::new(config),
            renderer,
            input_handler,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(tick = ?self.driver.tick_interval(), "game loop started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(FRAME_INTERVAL);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(&event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => break,
                    }
                }

                // Advance the simulation and draw
                _ = frame_timer.tick() => {
                    let now = Instant::now();
                    let elapsed = now - last_frame;
                    last_frame = now;

                    self.driver.update(elapsed);

                    self.driver.metrics_mut().update();
                    let snapshot = self.driver.snapshot();
                    let overlay = self.overlay();
                    let metrics = self.driver.metrics();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, metrics, overlay);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.driver.handle(InputAction::Quit);
                }
            }

            if self.driver.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        let action = self.input_handler.handle_event(event);
        if action != InputAction::None {
            debug!(?action, "input");
        }
        self.driver.handle(action);
    }

    fn overlay(&self) -> Overlay {
        if self.driver.is_paused() {
            Overlay::Paused
        } else if self.driver.is_awaiting_input() {
            Overlay::AwaitingInput
        } else {
            Overlay::None
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert!(mode.driver.state().is_alive);
        assert_eq!(mode.driver.state().score, 0);
        assert_eq!(mode.overlay(), Overlay::None);
    }

    #[test]
    fn test_events_reach_driver() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(&key(KeyCode::Char('p')));
        assert_eq!(mode.overlay(), Overlay::Paused);

        mode.handle_event(&key(KeyCode::Char('p')));
        mode.handle_event(&key(KeyCode::Up));
        assert_eq!(mode.driver.state().pending_direction, crate::game::Direction::Up);

        mode.handle_event(&key(KeyCode::Char('q')));
        assert!(mode.driver.should_quit());
    }

    #[test]
    fn test_awaiting_input_overlay() {
        let config = GameConfig {
            wait_for_input: true,
            ..GameConfig::default()
        };
        let mode = HumanMode::new(config);
        assert_eq!(mode.overlay(), Overlay::AwaitingInput);
    }
}
