//! Game constants for board size, colors, timing, and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

// Window dimensions in pixels
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

// Grid
pub const GRID_SIZE: u32 = 20;
pub const CELL_SIZE: f32 = GRID_SIZE as f32;
pub const GRID_WIDTH: i32 = (SCREEN_WIDTH / GRID_SIZE) as i32;
pub const GRID_HEIGHT: i32 = (SCREEN_HEIGHT / GRID_SIZE) as i32;

// Timing
pub const TICKS_PER_SECOND: u64 = 20;
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

pub const WINDOW_TITLE: &str = "Snake";

// Colors
pub const BOARD_BACKGROUND_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);
pub const BORDER_COLOR: Color = Color::srgb(93.0 / 255.0, 216.0 / 255.0, 228.0 / 255.0);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const SNAKE_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

// Z-index constants for rendering layers
pub const Z_GRID: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE: f32 = 2.0;
pub const Z_OUTLINE_OFFSET: f32 = 0.1;
