mod controls;
mod food;
mod game;
mod rendering;
mod snake;

use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use controls::ControlsPlugin;
use food::FoodPlugin;
use game::{
    BOARD_BACKGROUND_COLOR, Board, FoodEatenEvent, GameRng, GameSystems, SCREEN_HEIGHT,
    SCREEN_WIDTH, SnakeResetEvent, WINDOW_TITLE,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        title: WINDOW_TITLE.to_string(),
                        resizable: false,
                        ..default()
                    }),
                    // closing goes through ControlsPlugin so it gets logged
                    close_when_requested: false,
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,the_snake=debug".to_string(),
                    ..default()
                }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BOARD_BACKGROUND_COLOR))
        .init_resource::<Board>()
        .init_resource::<GameRng>()
        .add_message::<FoodEatenEvent>()
        .add_message::<SnakeResetEvent>()
        .configure_sets(
            Update,
            (GameSystems::Input, GameSystems::Tick, GameSystems::Render).chain(),
        )
        .add_plugins((ControlsPlugin, SnakePlugin, FoodPlugin, RenderingPlugin))
        .run();
}
