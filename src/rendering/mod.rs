//! Rendering plugin - camera, grid lines, and immediate-mode drawing of the food and snake.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    BORDER_COLOR, Board, CELL_SIZE, FOOD_COLOR, Food, GameSystems, Position, SNAKE_COLOR, Snake,
    Z_FOOD, Z_GRID, Z_OUTLINE_OFFSET, Z_SNAKE,
};

const LINE_THICKNESS: f32 = 1.0;

/// Plugin for drawing the board every frame.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            (draw_grid, draw_food, draw_snake)
                .chain()
                .in_set(GameSystems::Render),
        );
    }
}

/// World-space center of a grid cell. Grid y grows downwards, world y upwards.
pub fn cell_center(position: Position, board: &Board) -> Vec2 {
    Vec2::new(
        (position.x as f32 - board.width as f32 / 2.0 + 0.5) * CELL_SIZE,
        (board.height as f32 / 2.0 - position.y as f32 - 0.5) * CELL_SIZE,
    )
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// System to draw one line per column and row boundary.
fn draw_grid(mut painter: ShapePainter, board: Res<Board>) {
    let half_width = board.width as f32 * CELL_SIZE / 2.0;
    let half_height = board.height as f32 * CELL_SIZE / 2.0;

    painter.reset();
    painter.color = BORDER_COLOR;
    painter.thickness = LINE_THICKNESS;

    for column in 0..board.width {
        let x = column as f32 * CELL_SIZE - half_width;
        painter.line(
            Vec3::new(x, -half_height, Z_GRID),
            Vec3::new(x, half_height, Z_GRID),
        );
    }

    for row in 0..board.height {
        let y = half_height - row as f32 * CELL_SIZE;
        painter.line(
            Vec3::new(-half_width, y, Z_GRID),
            Vec3::new(half_width, y, Z_GRID),
        );
    }
}

fn draw_food(mut painter: ShapePainter, board: Res<Board>, food: Res<Food>) {
    painter.reset();
    paint_cell(&mut painter, cell_center(food.position, &board), Z_FOOD, FOOD_COLOR);
}

fn draw_snake(mut painter: ShapePainter, board: Res<Board>, snake: Res<Snake>) {
    painter.reset();
    for cell in snake.cells() {
        paint_cell(&mut painter, cell_center(*cell, &board), Z_SNAKE, SNAKE_COLOR);
    }
}

/// A filled cell with a thin border on top.
fn paint_cell(painter: &mut ShapePainter, center: Vec2, z: f32, color: Color) {
    painter.set_translation(center.extend(z));
    painter.hollow = false;
    painter.color = color;
    painter.rect(Vec2::splat(CELL_SIZE));

    painter.set_translation(center.extend(z + Z_OUTLINE_OFFSET));
    painter.hollow = true;
    painter.thickness = LINE_THICKNESS;
    painter.color = BORDER_COLOR;
    painter.rect(Vec2::splat(CELL_SIZE));
}
