use anyhow::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::config::{GameConfig, INITIAL_HEADING};
use crate::food::Food;
use crate::grid::{Direction, GridBounds};
use crate::snake::{AdvanceResult, Snake};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    /// The snake covers every cell. This is the winning ending.
    BoardFull,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    GameOver(GameOverReason),
}

impl GameState {
    pub fn is_running(&self) -> bool {
        matches!(self, GameState::Running)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// `None` when the tick was skipped because the game is already over.
    pub advance: Option<AdvanceResult>,
    pub ate_food: bool,
    pub state: GameState,
}

/// One game in progress: the snake, its food, and the bookkeeping around them.
pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    food: Food,
    state: GameState,
    score: u32,
    ticks: u64,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(config.start_position(), INITIAL_HEADING, config.initial_length);
        let food = Food::new(config.start_position());

        let mut session = GameSession { config, snake, food, state: GameState::Running, score: 0, ticks: 0, rng };
        session.restart();
        Ok(session)
    }

    /// A session starting from an explicit board, e.g. a prepared scenario.
    pub fn from_parts(config: GameConfig, snake: Snake, food: Food) -> Self {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        GameSession { config, snake, food, state: GameState::Running, score: 0, ticks: 0, rng }
    }

    pub fn restart(&mut self) {
        self.snake = Snake::new(self.config.start_position(), INITIAL_HEADING, self.config.initial_length);
        self.score = 0;
        self.ticks = 0;

        match Food::spawn(self.config.bounds, &self.snake, &mut self.rng) {
            Some(food) => {
                self.food = food;
                self.state = GameState::Running;
            }
            None => self.state = GameState::GameOver(GameOverReason::BoardFull),
        }

        info!("new game on a {}x{} grid", self.config.bounds.width, self.config.bounds.height);
    }

    /// Ignored once the game is over.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.state.is_running() {
            self.snake.set_direction(direction);
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome { advance: None, ate_food: false, state: self.state };
        }

        self.ticks += 1;
        let advance = self.snake.advance();
        let bounds = self.config.bounds;

        let mut ate_food = false;
        if self.snake.collides_with_wall(bounds) {
            self.game_over(GameOverReason::Wall);
        } else if self.snake.collides_with_self() {
            self.game_over(GameOverReason::SelfCollision);
        } else if advance.head == self.food.position() {
            ate_food = true;
            self.score += 1;
            self.snake.mark_growth_pending();

            if self.food.relocate(bounds, &self.snake, &mut self.rng).is_none() {
                self.game_over(GameOverReason::BoardFull);
            }
        }

        TickOutcome { advance: Some(advance), ate_food, state: self.state }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Food eaten this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bounds(&self) -> GridBounds {
        self.config.bounds
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, reason: GameOverReason) {
        info!("game over after {} ticks: {:?}, score {}", self.ticks, reason, self.score);
        self.state = GameState::GameOver(reason);
    }
}
