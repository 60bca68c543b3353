//! The per-tick update rule.

use rand::Rng;

use super::{Board, Food, Position, Snake};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Head position produced by the move, before any reset.
    pub head: Position,
    pub removed_tail: Option<Position>,
    /// Length of the snake when it bit itself, if it did.
    pub reset_from: Option<usize>,
    /// Where the eaten food was, if the head landed on it.
    pub ate_at: Option<Position>,
}

/// Runs one tick: commit the buffered turn, move, then resolve collisions.
///
/// The food check uses the head produced by the move even when the snake was
/// reset in the same tick, so a reset snake can still grow from that bite.
pub fn advance_tick<R: Rng + ?Sized>(
    snake: &mut Snake,
    food: &mut Food,
    board: &Board,
    rng: &mut R,
) -> TickReport {
    snake.commit_direction();
    let head = snake.advance(board);
    debug_assert!(board.contains(&head));
    let removed_tail = snake.last_removed();

    let reset_from = if snake.bites_itself() {
        let length = snake.cell_count();
        snake.reset();
        Some(length)
    } else {
        None
    };

    let ate_at = if head.collides_with(&food.position) {
        let eaten = food.position;
        snake.grow();
        food.randomize(board, rng);
        Some(eaten)
    } else {
        None
    };

    TickReport {
        head,
        removed_tail,
        reset_from,
        ate_at,
    }
}
