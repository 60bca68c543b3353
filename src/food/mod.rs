//! Food plugin - places the first food and reports when it gets eaten.

use bevy::prelude::*;

use crate::game::{Board, Food, FoodEatenEvent, GameRng, GameSystems};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_food)
            .add_systems(Update, log_food_eaten.after(GameSystems::Tick));
    }
}

/// Puts the food on a random cell. The snake is not taken into account.
fn spawn_food(mut commands: Commands, board: Res<Board>, mut rng: ResMut<GameRng>) {
    let food = Food::random(&board, &mut rng.0);
    debug!("Food placed at ({}, {})", food.position.x, food.position.y);
    commands.insert_resource(food);
}

/// System to log each meal.
fn log_food_eaten(mut food_eaten_reader: MessageReader<FoodEatenEvent>, food: Res<Food>) {
    for event in food_eaten_reader.read() {
        debug!(
            "Ate food at ({}, {}), growing to {}; next food at ({}, {})",
            event.position.x, event.position.y, event.length, food.position.x, food.position.y
        );
    }
}
