//! Grid primitives shared by the snake, the food, and the renderer.

use bevy::prelude::*;

/// Grid position of a cell on the board, in cells rather than pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighbouring cell in `direction`, wrapping around the board edges.
    pub fn step(&self, direction: Direction, board: &Board) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: (self.x + dx).rem_euclid(board.width),
            y: (self.y + dy).rem_euclid(board.height),
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector in grid space. `y` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Maps an arrow key to a direction.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowLeft => Some(Direction::Left),
            KeyCode::ArrowRight => Some(Direction::Right),
            KeyCode::ArrowUp => Some(Direction::Up),
            KeyCode::ArrowDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Dimensions of the board in cells. The board is a torus.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Board { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, position: &Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(super::GRID_WIDTH, super::GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_matches_window() {
        let board = Board::default();
        assert_eq!(board, Board::new(32, 24));
        assert_eq!(board.center(), Position::new(16, 12));
    }

    #[test]
    fn step_wraps_on_every_edge() {
        let board = Board::new(32, 24);
        assert_eq!(
            Position::new(31, 5).step(Direction::Right, &board),
            Position::new(0, 5)
        );
        assert_eq!(
            Position::new(0, 5).step(Direction::Left, &board),
            Position::new(31, 5)
        );
        assert_eq!(
            Position::new(7, 0).step(Direction::Up, &board),
            Position::new(7, 23)
        );
        assert_eq!(
            Position::new(7, 23).step(Direction::Down, &board),
            Position::new(7, 0)
        );
    }

    #[test]
    fn opposites_are_symmetric() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.delta();
            assert_eq!(direction.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn only_arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::KeyW), None);
        assert_eq!(Direction::from_key(KeyCode::Space), None);
    }

    mod props {
        use crate::game::{Board, Direction, Position};
        use proptest::prelude::*;

        fn any_direction() -> impl Strategy<Value = Direction> {
            prop_oneof![
                Just(Direction::Left),
                Just(Direction::Right),
                Just(Direction::Up),
                Just(Direction::Down),
            ]
        }

        proptest! {
            #[test]
            fn step_stays_on_board(
                width in 1i32..64,
                height in 1i32..64,
                x in 0i32..64,
                y in 0i32..64,
                direction in any_direction(),
            ) {
                let board = Board::new(width, height);
                let start = Position::new(x % width, y % height);
                let next = start.step(direction, &board);
                let (dx, dy) = direction.delta();

                prop_assert!(board.contains(&next));
                prop_assert_eq!(next.x, (start.x + dx + width) % width);
                prop_assert_eq!(next.y, (start.y + dy + height) % height);
            }
        }
    }
}
