//! Snake plugin - spawns the snake and drives the fixed-rate tick.

use bevy::{prelude::*, time::common_conditions::on_timer};

use crate::game::{
    Board, FoodEatenEvent, Food, GameRng, GameSystems, Snake, SnakeResetEvent, TICK_INTERVAL,
    advance_tick,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_snake).add_systems(
            Update,
            (advance_snake.run_if(on_timer(TICK_INTERVAL)), log_resets)
                .chain()
                .in_set(GameSystems::Tick),
        );
    }
}

/// Places a one-cell snake in the middle of the board.
fn spawn_snake(mut commands: Commands, board: Res<Board>) {
    let start = board.center();
    info!(
        "Starting on a {}x{} board at ({}, {})",
        board.width, board.height, start.x, start.y
    );
    commands.insert_resource(Snake::new(start));
}

/// System to run one game tick and announce what happened.
fn advance_snake(
    board: Res<Board>,
    mut snake: ResMut<Snake>,
    mut food: ResMut<Food>,
    mut rng: ResMut<GameRng>,
    mut food_eaten_writer: MessageWriter<FoodEatenEvent>,
    mut reset_writer: MessageWriter<SnakeResetEvent>,
) {
    let report = advance_tick(&mut snake, &mut food, &board, &mut rng.0);
    trace!("Head moved to ({}, {})", report.head.x, report.head.y);

    if let Some(tail) = report.removed_tail {
        trace!("Tail left ({}, {})", tail.x, tail.y);
    }

    if let Some(length) = report.reset_from {
        reset_writer.write(SnakeResetEvent { length });
    }

    if let Some(position) = report.ate_at {
        food_eaten_writer.write(FoodEatenEvent {
            position,
            length: snake.length(),
        });
    }
}

/// System to log self collisions.
fn log_resets(mut reset_reader: MessageReader<SnakeResetEvent>) {
    for event in reset_reader.read() {
        info!("Snake bit itself at length {}, starting over", event.length);
    }
}
