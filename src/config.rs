use std::time::Duration;

use anyhow::{ensure, Result};

use crate::grid::{Direction, GridBounds, Position};

pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;
pub const CELL_SIZE: i32 = 20;
pub const COLUMNS: i32 = SCREEN_WIDTH / CELL_SIZE;
pub const ROWS: i32 = SCREEN_HEIGHT / CELL_SIZE;

pub const FPS: u32 = 12;
pub const INITIAL_SNAKE_LENGTH: usize = 2;
pub const INITIAL_HEADING: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub bounds: GridBounds,
    pub initial_length: usize,
    /// Ticks per second.
    pub fps: u32,
    /// Fixed seed for food placement, fresh entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            bounds: GridBounds::new(COLUMNS, ROWS),
            initial_length: INITIAL_SNAKE_LENGTH,
            fps: FPS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: i32, height: i32) -> Self {
        GameConfig { bounds: GridBounds::new(width, height), ..Default::default() }
    }

    /// A quarter of the way in from the left, vertically centered.
    pub fn start_position(&self) -> Position {
        Position::new(self.bounds.width / 4, self.bounds.height / 2)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        let GridBounds { width, height } = self.bounds;
        ensure!(width > 0 && height > 0, "grid must be at least 1x1, got {}x{}", width, height);
        ensure!(self.initial_length > 0, "initial snake length must be positive");
        ensure!(self.fps > 0, "fps must be positive");

        // The body trails to the left of the start cell.
        let start = self.start_position();
        let tail_x = start.x - (self.initial_length as i32 - 1);
        ensure!(
            tail_x >= 0,
            "a snake of length {} does not fit on a {}x{} grid",
            self.initial_length,
            width,
            height
        );
        ensure!(
            self.initial_length < self.bounds.cell_count(),
            "the starting snake leaves no room for food"
        );

        Ok(())
    }
}
