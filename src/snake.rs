use std::collections::VecDeque;

use crate::grid::{Direction, GridBounds, Position};

/// What a single `advance` changed on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdvanceResult {
    pub head: Position,
    pub previous_head: Position,
    /// Tail cell released this tick, `None` while growing.
    pub vacated: Option<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending_heading: Direction,
    grow_next_move: bool,
}

impl Snake {
    /// Head at `head`, the remaining segments trailing behind it.
    pub fn new(head: Position, heading: Direction, length: usize) -> Self {
        let (dx, dy) = heading.delta();

        let body = (0..length.max(1) as i32)
            .map(|i| Position::new(head.x - dx * i, head.y - dy * i))
            .collect();

        Snake { body, heading, pending_heading: heading, grow_next_move: false }
    }

    /// Segments are given head first.
    pub fn from_body<I>(segments: I, heading: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");

        Snake { body, heading, pending_heading: heading, grow_next_move: false }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Head to tail.
    pub fn body(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Direction used by the last advance.
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Direction the next advance will use.
    pub fn pending_heading(&self) -> Direction {
        self.pending_heading
    }

    pub fn is_growth_pending(&self) -> bool {
        self.grow_next_move
    }

    /// Buffers a turn for the next advance. Later calls within the same tick
    /// replace earlier ones; a U-turn is dropped once the snake has a neck.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.body.len() >= 2 && requested.is_opposite(self.heading) {
            return;
        }

        self.pending_heading = requested;
    }

    pub fn advance(&mut self) -> AdvanceResult {
        self.heading = self.pending_heading;

        let previous_head = self.head();
        let head = previous_head.moved(self.heading);
        self.body.push_front(head);

        let vacated = if self.grow_next_move {
            self.grow_next_move = false;
            None
        } else {
            self.body.pop_back()
        };

        AdvanceResult { head, previous_head, vacated }
    }

    pub fn mark_growth_pending(&mut self) {
        self.grow_next_move = true;
    }

    pub fn collides_with_wall(&self, bounds: GridBounds) -> bool {
        !bounds.contains(self.head())
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;

    fn body_of(snake: &Snake) -> Vec<Position> {
        snake.body().copied().collect()
    }

    #[test]
    fn new_lays_body_behind_head() {
        let snake = Snake::new(Position::new(5, 5), Right, 3);
        assert_eq!(
            body_of(&snake),
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)]
        );

        let snake = Snake::new(Position::new(5, 5), Up, 2);
        assert_eq!(body_of(&snake), vec![Position::new(5, 5), Position::new(5, 6)]);
    }

    #[test]
    fn advance_keeps_length_without_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Right, 3);

        for step in 1..=10 {
            let res = snake.advance();
            assert_eq!(snake.len(), 3);
            assert_eq!(res.head, Position::new(5 + step, 5));
            assert_eq!(res.vacated, Some(Position::new(2 + step, 5)));
        }
    }

    #[test]
    fn growth_skips_exactly_one_tail_removal() {
        let mut snake = Snake::new(Position::new(5, 5), Right, 3);
        snake.mark_growth_pending();
        assert!(snake.is_growth_pending());

        let res = snake.advance();
        assert_eq!(res.vacated, None);
        assert_eq!(snake.len(), 4);
        assert!(!snake.is_growth_pending());
        assert_eq!(snake.body().last(), Some(&Position::new(3, 5)));

        snake.advance();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn reversal_is_ignored_with_a_neck() {
        let mut snake = Snake::new(Position::new(5, 5), Right, 2);
        snake.set_direction(Left);
        assert_eq!(snake.pending_heading(), Right);

        let res = snake.advance();
        assert_eq!(res.head, Position::new(6, 5));
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn single_segment_may_reverse() {
        let mut snake = Snake::new(Position::new(5, 5), Right, 1);
        snake.set_direction(Left);
        assert_eq!(snake.advance().head, Position::new(4, 5));
        assert_eq!(snake.heading(), Left);
    }

    #[test]
    fn last_request_before_advance_wins() {
        let mut snake = Snake::new(Position::new(5, 5), Right, 3);
        snake.set_direction(Up);
        snake.set_direction(Down);
        assert_eq!(snake.heading(), Right);

        snake.advance();
        assert_eq!(snake.head(), Position::new(5, 6));
        assert_eq!(snake.heading(), Down);
    }

    #[test]
    fn reversal_guard_checks_applied_heading() {
        // Up then Left within one tick: Left is checked against Right, not Up.
        let mut snake = Snake::new(Position::new(5, 5), Right, 3);
        snake.set_direction(Up);
        snake.set_direction(Left);
        assert_eq!(snake.pending_heading(), Up);
    }

    #[test]
    fn wall_detection_on_every_edge() {
        let bounds = GridBounds::new(30, 20);
        for head in &[(-1, 7), (30, 7), (12, -1), (12, 20)] {
            let snake = Snake::from_body(vec![Position::from(*head)], Right);
            assert!(snake.collides_with_wall(bounds), "{:?} should hit a wall", head);
        }

        let snake = Snake::from_body(vec![Position::new(29, 19)], Right);
        assert!(!snake.collides_with_wall(bounds));
    }

    #[test]
    fn self_collision_on_body_segment() {
        let snake = Snake::from_body(
            vec![
                Position::new(4, 4),
                Position::new(4, 5),
                Position::new(4, 4),
                Position::new(5, 4),
            ],
            Up,
        );
        assert!(snake.collides_with_self());

        let snake = Snake::new(Position::new(4, 4), Up, 4);
        assert!(!snake.collides_with_self());
    }

    #[test]
    fn curling_into_itself_collides() {
        let mut snake = Snake::from_body(
            vec![
                Position::new(3, 4),
                Position::new(3, 5),
                Position::new(4, 5),
                Position::new(4, 4),
                Position::new(4, 3),
            ],
            Up,
        );
        snake.set_direction(Right);
        snake.advance();
        assert!(snake.collides_with_self());
    }

    #[test]
    fn occupies_every_segment() {
        let snake = Snake::new(Position::new(5, 5), Right, 3);
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(3, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }
}
