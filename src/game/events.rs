//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Message triggered when the head lands on the food.
#[derive(Message)]
pub struct FoodEatenEvent {
    pub position: Position,
    pub length: usize,
}

/// Message triggered when the snake bites itself and starts over.
#[derive(Message)]
pub struct SnakeResetEvent {
    pub length: usize,
}
