use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::grid::{GridBounds, Position};
use crate::snake::Snake;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    pos: Position,
}

impl Food {
    pub fn new(pos: Position) -> Self {
        Food { pos }
    }

    /// `None` when the snake already covers the whole board.
    pub fn spawn<R: Rng + ?Sized>(bounds: GridBounds, snake: &Snake, rng: &mut R) -> Option<Self> {
        random_free_cell(bounds, snake, rng).map(Food::new)
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Moves to a cell drawn uniformly from the cells the snake leaves free.
    /// On a full board the food stays put and `None` is returned.
    pub fn relocate<R: Rng + ?Sized>(&mut self, bounds: GridBounds, snake: &Snake, rng: &mut R) -> Option<Position> {
        let pos = random_free_cell(bounds, snake, rng)?;
        debug!("food relocated from ({}, {}) to ({}, {})", self.pos.x, self.pos.y, pos.x, pos.y);

        self.pos = pos;
        Some(pos)
    }
}

fn random_free_cell<R: Rng + ?Sized>(bounds: GridBounds, snake: &Snake, rng: &mut R) -> Option<Position> {
    let choices: Vec<Position> = bounds.cells().filter(|pos| !snake.occupies(*pos)).collect();
    choices.choose(rng).copied()
}
