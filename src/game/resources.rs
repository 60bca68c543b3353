//! Game resources (session state).

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

use super::{Board, Direction, Position};

/// The player's snake: occupied cells, head first, plus the direction buffer.
#[derive(Resource, Debug, Clone)]
pub struct Snake {
    cells: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    last_removed: Option<Position>,
    start: Position,
}

impl Snake {
    /// A snake of length 1 at `start`, heading right.
    pub fn new(start: Position) -> Self {
        Snake {
            cells: VecDeque::from([start]),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            last_removed: None,
            start,
        }
    }

    pub fn head(&self) -> Position {
        // cells is never empty: new() and reset() seed it and advance() only pops after a push
        self.cells[0]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Target length; grows by one per food eaten.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Tail cell dropped by the most recent move, if any.
    pub fn last_removed(&self) -> Option<Position> {
        self.last_removed
    }

    /// Buffers a turn for the next tick. Reversals of the current direction
    /// are ignored and leave the buffer untouched. Returns whether the request
    /// was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Applies the buffered turn, if any. No reversal check happens here.
    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Pushes a new head one cell ahead and drops the tail unless the snake is
    /// still short of its target length.
    pub fn advance(&mut self, board: &Board) -> Position {
        let new_head = self.head().step(self.direction, board);
        self.cells.push_front(new_head);
        self.last_removed = if self.cells.len() > self.length {
            self.cells.pop_back()
        } else {
            None
        };
        new_head
    }

    /// Whether the head sits on any other cell of the body.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(1).any(|cell| cell.collides_with(&head))
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Back to a single cell at the start position, heading right.
    pub fn reset(&mut self) {
        self.length = 1;
        self.cells.clear();
        self.cells.push_back(self.start);
        self.direction = Direction::Right;
        self.pending_direction = None;
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Position], direction: Direction) -> Self {
        let mut snake = Snake::new(cells[0]);
        snake.cells = cells.iter().copied().collect();
        snake.length = cells.len();
        snake.direction = direction;
        snake
    }

    #[cfg(test)]
    pub(crate) fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }
}

/// The single consumable on the board.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Food { position }
    }

    /// Food at a uniformly random cell.
    pub fn random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Self {
        let mut food = Food::new(Position::new(0, 0));
        food.randomize(board, rng);
        food
    }

    /// Moves to a uniformly random cell. Cells under the snake are not excluded.
    pub fn randomize<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        self.position = Position {
            x: rng.random_range(0..board.width),
            y: rng.random_range(0..board.height),
        };
    }
}

/// Random source for food placement.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        GameRng(StdRng::from_os_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x5eed;

    fn line(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position::new(x, y)).collect()
    }

    #[test]
    fn new_snake_is_a_single_cell_heading_right() {
        let snake = Snake::new(Position::new(16, 12));
        assert_eq!(snake.head(), Position::new(16, 12));
        assert_eq!(snake.cell_count(), 1);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_removed(), None);
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake =
            Snake::from_cells(&line(&[(10, 5), (9, 5), (8, 5)]), Direction::Right);
        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), None);

        assert!(snake.request_direction(Direction::Up));
        assert!(!snake.request_direction(Direction::Left));
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn later_request_overwrites_pending() {
        let mut snake = Snake::new(Position::new(3, 3));
        snake.request_direction(Direction::Up);
        snake.request_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn commit_clears_pending() {
        let mut snake = Snake::new(Position::new(3, 3));
        snake.request_direction(Direction::Down);
        snake.commit_direction();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending_direction(), None);

        snake.commit_direction();
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn advance_drops_tail_at_target_length() {
        let board = Board::default();
        let mut snake =
            Snake::from_cells(&line(&[(10, 5), (9, 5), (8, 5)]), Direction::Right);

        let head = snake.advance(&board);

        assert_eq!(head, Position::new(11, 5));
        assert_eq!(
            snake.cells().copied().collect::<Vec<_>>(),
            line(&[(11, 5), (10, 5), (9, 5)])
        );
        assert_eq!(snake.last_removed(), Some(Position::new(8, 5)));
    }

    #[test]
    fn advance_keeps_tail_while_growing() {
        let board = Board::default();
        let mut snake = Snake::new(Position::new(4, 4));
        snake.grow();

        snake.advance(&board);
        assert_eq!(snake.cell_count(), 2);
        assert_eq!(snake.last_removed(), None);

        snake.advance(&board);
        assert_eq!(snake.cell_count(), 2);
        assert_eq!(snake.last_removed(), Some(Position::new(4, 4)));
    }

    #[test]
    fn bites_itself_ignores_the_head() {
        let snake = Snake::new(Position::new(1, 1));
        assert!(!snake.bites_itself());

        let looped = Snake::from_cells(
            &line(&[(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)]),
            Direction::Up,
        );
        assert!(looped.bites_itself());
    }

    #[test]
    fn reset_restores_start_state() {
        let mut snake =
            Snake::from_cells(&line(&[(10, 5), (9, 5), (8, 5)]), Direction::Down)
                .with_start(Position::new(16, 12));
        snake.request_direction(Direction::Left);

        snake.reset();

        assert_eq!(snake.cells().copied().collect::<Vec<_>>(), line(&[(16, 12)]));
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn randomize_stays_on_board() {
        let board = Board::new(4, 3);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::new(Position::new(0, 0));

        for _ in 0..200 {
            food.randomize(&board, &mut rng);
            assert!(board.contains(&food.position));
        }
    }

    #[test]
    fn randomize_reaches_every_cell() {
        let board = Board::new(3, 2);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(Food::random(&board, &mut rng).position);
        }

        assert_eq!(seen.len(), 6);
    }
}
