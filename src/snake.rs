use std::collections::VecDeque;

use crate::config::INITIAL_SNAKE_LEN;
use crate::grid::{Cell, GridSize};
use crate::input::{Direction, direction_change_is_valid};

/// Snake body plus the committed and pending headings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Places a fresh snake horizontally centered on the grid, facing right.
    #[must_use]
    pub fn spawn(grid: GridSize) -> Self {
        let head = Cell::new(i32::from(grid.width / 2), i32::from(grid.height / 2));
        let body = (0..INITIAL_SNAKE_LEN)
            .map(|offset| Cell::new(head.x - offset as i32, head.y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
            pending_direction: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Stores `direction` as the pending heading for the next tick.
    ///
    /// Reversals are checked against the pending heading, so two quick
    /// presses cannot sneak a 180° turn in before the tick. Returns whether
    /// the input was accepted.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.pending_direction, direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    /// Makes the pending heading current.
    pub fn commit_direction(&mut self) {
        self.direction = self.pending_direction;
    }

    /// Head position after one step in the current direction.
    #[must_use]
    pub fn next_head(&self) -> Cell {
        self.head().step(self.direction)
    }

    /// Prepends `new_head` and drops the tail unless the snake grew.
    pub fn advance(&mut self, new_head: Cell, grew: bool) {
        self.body.push_front(new_head);
        if !grew {
            let _ = self.body.pop_back();
        }
    }

    /// Returns true if moving the head onto `cell` hits the body.
    ///
    /// When not growing the tail vacates its cell this tick, so it is
    /// excluded from the check.
    #[must_use]
    pub fn blocks(&self, cell: Cell, grows: bool) -> bool {
        let checked = if grows {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(checked).any(|segment| *segment == cell)
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading that the next tick will commit.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn spawn_centers_three_segments_facing_right() {
        let snake = Snake::spawn(GridSize::square(15));

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(7, 7), Cell::new(6, 7), Cell::new(5, 7)]
        );
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::spawn(GridSize::square(10));

        let next = snake.next_head();
        snake.advance(next, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.occupies(Cell::new(3, 5)));
    }

    #[test]
    fn advance_with_growth_keeps_tail() {
        let mut snake = Snake::spawn(GridSize::square(10));

        let next = snake.next_head();
        snake.advance(next, true);

        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell::new(3, 5)));
    }

    #[test]
    fn reversal_is_checked_against_pending_direction() {
        let mut snake = Snake::spawn(GridSize::square(10));

        assert!(!snake.buffer_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Right);

        assert!(snake.buffer_direction(Direction::Down));
        // Left is now orthogonal to the pending heading even though it
        // reverses the committed one.
        assert!(snake.buffer_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn double_tap_reversal_is_rejected() {
        let mut snake = Snake::spawn(GridSize::square(10));

        assert!(snake.buffer_direction(Direction::Up));
        assert!(!snake.buffer_direction(Direction::Down));
        assert_eq!(snake.pending_direction(), Direction::Up);
    }

    #[test]
    fn commit_applies_pending_heading_to_next_head() {
        let mut snake = Snake::spawn(GridSize::square(10));

        snake.buffer_direction(Direction::Up);
        assert_eq!(snake.next_head(), Cell::new(6, 5));

        snake.commit_direction();
        assert_eq!(snake.next_head(), Cell::new(5, 4));
    }

    #[test]
    fn vacating_tail_does_not_block() {
        // A 2x2 loop: the head chases the tail.
        let snake = Snake::from_segments(
            vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 0),
            ],
            Direction::Left,
        );

        assert!(!snake.blocks(Cell::new(0, 0), false));
        assert!(snake.blocks(Cell::new(0, 0), true));
        assert!(snake.blocks(Cell::new(0, 1), false));
    }
}
