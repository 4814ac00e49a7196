use std::time::{Duration, Instant};

use anyhow::{ensure, Result};
use crossterm::style::Color;
use log::info;

use crate::{Coords, TermInt};
use crate::term::{Glyph, TermManager};
use crate::input::{key_action, KeyAction};
use crate::grid::{Direction, Position};
use crate::session::{GameOverReason, GameSession, GameState, TickOutcome};

const CELL_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';

const COLOR_SNAKE: Color = Color::Rgb { r: 80, g: 200, b: 120 };
const COLOR_SNAKE_HEAD: Color = Color::Rgb { r: 100, g: 230, b: 150 };
const COLOR_FOOD: Color = Color::Rgb { r: 235, g: 64, b: 52 };
const COLOR_TEXT: Color = Color::Rgb { r: 230, g: 230, b: 230 };
const COLOR_GAME_OVER: Color = Color::Rgb { r: 255, g: 100, b: 100 };

/// Interactive front end: owns the terminal and drives a `GameSession` in real time.
pub struct SnakeGame {
    session: GameSession,
    term: TermManager,
    /// Top-left corner of the board border.
    origin: Coords,
    paused: bool,
}

impl SnakeGame {
    pub fn new(session: GameSession, term: TermManager) -> Result<Self> {
        let (term_w, term_h) = term.get_terminal_size();
        let (board_w, board_h) = board_size(&session);

        // One extra row above the board for the score.
        ensure!(
            term_w as i32 >= board_w && term_h as i32 > board_h,
            "terminal is {}x{}, the board needs at least {}x{}",
            term_w,
            term_h,
            board_w,
            board_h + 1
        );

        let origin = (
            ((term_w as i32 - board_w) / 2) as TermInt,
            ((term_h as i32 - board_h) / 2).max(1) as TermInt,
        );

        Ok(SnakeGame { session, term, origin, paused: false })
    }

    /// Runs until the player quits. The terminal is restored even when the loop fails.
    pub fn play(&mut self) -> Result<()> {
        self.term.setup()?;
        let result = self.game_loop();
        self.term.restore()?;
        result
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_loop(&mut self) -> Result<()> {
        info!("starting interactive game");
        self.draw_board()?;

        let interval = self.session.config().tick_interval();
        let mut last_step = Instant::now();
        let mut turn: Option<Direction> = None;

        loop {
            let idle = self.paused || !self.session.state().is_running();
            let timeout = if idle {
                interval
            } else {
                interval.checked_sub(last_step.elapsed()).unwrap_or(Duration::from_millis(0))
            };

            for key_ev in self.term.read_key_events_queue(timeout)? {
                match key_action(&key_ev) {
                    KeyAction::Quit => {
                        info!("quit at score {}", self.session.score());
                        return Ok(());
                    }
                    KeyAction::Turn(dir) if !idle => turn = Some(dir),
                    KeyAction::TogglePause if self.session.state().is_running() => self.toggle_pause()?,
                    KeyAction::Restart if !self.session.state().is_running() => {
                        self.session.restart();
                        self.draw_board()?;
                        turn = None;
                        last_step = Instant::now();
                    }
                    _ => {}
                }
            }

            if self.paused || !self.session.state().is_running() {
                continue;
            }

            if last_step.elapsed() >= interval {
                last_step = Instant::now();

                // Only the last turn pressed during the tick counts
                if let Some(dir) = turn.take() {
                    self.session.request_direction(dir);
                }

                let outcome = self.session.tick();
                self.print_update(&outcome)?;

                if let GameState::GameOver(reason) = outcome.state {
                    self.game_over(reason)?;
                }
            }
        }
    }

    fn draw_board(&mut self) -> Result<()> {
        self.paused = false;
        self.term.clear()?;

        let (board_w, board_h) = board_size(&self.session);
        self.term.draw_borders(self.origin, (board_w as TermInt, board_h as TermInt))?;
        self.print_score()?;

        let body: Vec<Position> = self.session.snake().body().copied().collect();
        for (i, pos) in body.iter().enumerate() {
            let color = if i == 0 {COLOR_SNAKE_HEAD} else {COLOR_SNAKE};
            self.print_cell(*pos, Glyph::colored(CELL_CHAR, color))?;
        }

        let food = self.session.food().position();
        self.print_cell(food, Glyph::colored(CELL_CHAR, COLOR_FOOD))?;

        self.term.flush()
    }

    fn print_update(&mut self, outcome: &TickOutcome) -> Result<()> {
        let mov = match outcome.advance {
            Some(mov) => mov,
            None => return Ok(()),
        };

        if let Some(tail) = mov.vacated {
            self.print_cell(tail, Glyph::BLANK)?;
        }

        self.print_cell(mov.previous_head, Glyph::colored(CELL_CHAR, COLOR_SNAKE))?;
        self.print_cell(mov.head, Glyph::colored(CELL_CHAR, COLOR_SNAKE_HEAD))?;

        if outcome.ate_food {
            self.print_score()?;
            if outcome.state.is_running() {
                let food = self.session.food().position();
                self.print_cell(food, Glyph::colored(CELL_CHAR, COLOR_FOOD))?;
            }
        }

        self.term.flush()
    }

    fn game_over(&mut self, reason: GameOverReason) -> Result<()> {
        let won = reason == GameOverReason::BoardFull;

        if !won {
            let body: Vec<Position> = self.session.snake().body().copied().collect();
            for pos in body {
                self.print_cell(pos, Glyph::colored(DEAD_SNAKE_CHAR, COLOR_GAME_OVER))?;
            }
        }

        let title = if won {"YOU WIN"} else {"GAME OVER"};
        let score = format!("Score: {}", self.session.score());

        self.term.show_message(&[
            title,
            score.as_str(),
            "",
            "Press Enter or R to Restart",
            "Esc to Quit",
        ])
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press P to resume", "or Esc to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }

    fn print_score(&mut self) -> Result<()> {
        let text = format!("Score: {:<6}", self.session.score());
        let pos = (self.origin.0, self.origin.1 - 1);
        self.term.print_str_at(pos, &text, Some(COLOR_TEXT))
    }

    /// Cells are two columns wide to look roughly square. Off-board cells are skipped.
    fn print_cell(&mut self, pos: Position, glyph: Glyph) -> Result<()> {
        if !self.session.bounds().contains(pos) {
            return Ok(());
        }

        let x = self.origin.0 + 1 + 2 * pos.x as TermInt;
        let y = self.origin.1 + 1 + pos.y as TermInt;
        self.term.print_at((x, y), glyph)?;
        self.term.print_at((x + 1, y), glyph)
    }
}

/// Border included, in terminal cells.
fn board_size(session: &GameSession) -> (i32, i32) {
    let bounds = session.bounds();
    (bounds.width * 2 + 2, bounds.height + 2)
}
