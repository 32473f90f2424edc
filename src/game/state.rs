use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid, addressed by column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing the point `(px, py)` on a surface where each cell is
    /// `cell_size` units wide and tall.
    ///
    /// Uses floor division, so points left of or above the origin land on
    /// negative cells rather than being folded into cell 0.
    pub fn from_pixels(px: i32, py: i32, cell_size: u32) -> Self {
        let size = cell_size.max(1) as i32;
        Self {
            x: px.div_euclid(size),
            y: py.div_euclid(size),
        }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// A snake made of a single head cell
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head; the tail is left in place until `pop_tail`
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    pub fn pop_tail(&mut self) -> Option<Position> {
        // Never drop the head.
        if self.body.len() > 1 {
            self.body.pop()
        } else {
            None
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state, owned by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Vec<Position>,
    /// Committed direction of travel
    pub direction: Direction,
    /// Direction applied on the next tick
    pub pending_direction: Direction,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    /// What ended the game, if it has ended
    pub collision: Option<CollisionType>,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Vec<Position>,
        direction: Direction,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            pending_direction: direction,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
            collision: None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Read-only copy handed to renderers
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            snake: self.snake.body.clone(),
            food: self.food.clone(),
            score: self.score,
            terminated: !self.is_alive,
            grid_width: self.grid_width,
            grid_height: self.grid_height,
        }
    }
}

/// What a renderer sees after each tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Snake cells, head first
    pub snake: Vec<Position>,
    pub food: Vec<Position>,
    pub score: u32,
    pub terminated: bool,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}
