//! Classic single-player Snake on a fixed grid.
//!
//! The rules live in [`Snake`], [`Food`] and [`GameSession`] and carry no I/O;
//! [`game::SnakeGame`] puts a session on a terminal with keyboard controls.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod session;
pub mod snake;
pub mod term;

pub type TermInt = u16;
pub type Coords = (u16, u16);

pub use config::GameConfig;
pub use food::Food;
pub use grid::{Direction, GridBounds, Position};
pub use session::{GameOverReason, GameSession, GameState, TickOutcome};
pub use snake::{AdvanceResult, Snake};
