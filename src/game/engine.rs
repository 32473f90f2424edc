use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, trace};

use super::{
    config::GameConfig,
    direction::Direction,
    food::spawn_food,
    state::{CollisionType, GameSnapshot, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the food batch ran out and was replaced this step
    pub respawned_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    pub score: u32,
    /// State after the step, for the renderer
    pub snapshot: GameSnapshot,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    /// Final score when this step ended the game
    pub fn game_over(&self) -> Option<u32> {
        self.terminated.then_some(self.score)
    }
}

/// The game engine that handles all game logic
///
/// Owns the whole game state; collaborators read it through [`GameEngine::state`]
/// or [`GameEngine::snapshot`] and steer it with [`GameEngine::set_direction`].
pub struct GameEngine<R: Rng = SmallRng> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// Create a new game engine with the given configuration
    ///
    /// Food placement is seeded from `config.seed` when present.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let snake = Snake::new(config.start);
        let state = GameState::new(
            snake,
            Vec::new(),
            config.start_direction,
            config.grid_width,
            config.grid_height,
        );
        let mut engine = Self { config, state, rng };
        engine.reset();
        engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn is_terminated(&self) -> bool {
        !self.state.is_alive
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameSnapshot {
        let snake = Snake::new(self.config.start);
        let food = spawn_food(
            &mut self.rng,
            self.config.grid_width,
            self.config.grid_height,
            &snake.body,
            self.config.food_batch_size,
        );

        self.state = GameState::new(
            snake,
            food,
            self.config.start_direction,
            self.config.grid_width,
            self.config.grid_height,
        );
        info!(start = ?self.config.start, food = ?self.state.food, "game reset");

        self.state.snapshot()
    }

    /// Request a turn, applied on the next tick
    ///
    /// Returns false and changes nothing when `direction` would reverse the
    /// snake onto its neck, or when the game is over. Later requests within
    /// the same tick replace earlier ones.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.state.is_alive || self.state.direction.is_opposite(direction) {
            trace!(%direction, current = %self.state.direction, "turn rejected");
            return false;
        }
        self.state.pending_direction = direction;
        true
    }

    /// Execute one step of the game
    #[instrument(level = "trace", skip_all)]
    pub fn tick(&mut self) -> StepResult {
        if !self.state.is_alive {
            return self.result(StepInfo {
                ate_food: false,
                respawned_food: false,
                collision_type: self.state.collision,
            });
        }

        self.state.direction = self.state.pending_direction;
        let new_head = self.state.snake.head().moved_in_direction(self.state.direction);
        self.state.snake.push_head(new_head);
        self.state.steps += 1;

        // The tail has not moved yet, so it still blocks the head.
        if let Some(collision_type) = self.check_collision(new_head) {
            self.state.is_alive = false;
            self.state.collision = Some(collision_type);
            info!(
                score = self.state.score,
                steps = self.state.steps,
                collision = ?collision_type,
                "game over"
            );

            return self.result(StepInfo {
                ate_food: false,
                respawned_food: false,
                collision_type: Some(collision_type),
            });
        }

        let ate_food = match self.state.food.iter().position(|&f| f == new_head) {
            Some(index) => {
                self.state.food.swap_remove(index);
                self.state.score += 1;
                debug!(score = self.state.score, at = ?new_head, "food eaten");
                true
            }
            None => {
                self.state.snake.pop_tail();
                false
            }
        };

        let respawned_food = ate_food && self.state.food.is_empty();
        if respawned_food {
            self.state.food = spawn_food(
                &mut self.rng,
                self.state.grid_width,
                self.state.grid_height,
                &self.state.snake.body,
                self.config.food_batch_size,
            );
            debug!(food = ?self.state.food, "food batch respawned");
        }

        self.result(StepInfo {
            ate_food,
            respawned_food,
            collision_type: None,
        })
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, head: Position) -> Option<CollisionType> {
        if !self.state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn result(&self, info: StepInfo) -> StepResult {
        StepResult {
            terminated: !self.state.is_alive,
            score: self.state.score,
            snapshot: self.state.snapshot(),
            info,
        }
    }
}
