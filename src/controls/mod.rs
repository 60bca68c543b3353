//! Controls plugin - turns arrow key presses into buffered turns and handles quitting.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

use crate::game::{Direction, GameSystems, Snake};

/// Plugin for player input.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (quit_on_close_request, snake_direction_input)
                .chain()
                .in_set(GameSystems::Input),
        );
    }
}

/// System to exit the app as soon as the window asks to close.
fn quit_on_close_request(
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut exit_writer: MessageWriter<AppExit>,
) {
    if close_requests.read().next().is_some() {
        info!("Quit requested, shutting down");
        exit_writer.write(AppExit::Success);
    }
}

/// System to buffer turns from key presses, in the order they arrived.
fn snake_direction_input(
    mut keyboard_events: MessageReader<KeyboardInput>,
    mut snake: ResMut<Snake>,
) {
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed || event.repeat {
            continue;
        }

        let Some(direction) = Direction::from_key(event.key_code) else {
            continue;
        };

        if snake.request_direction(direction) {
            trace!("Buffered turn {:?}", snake.pending_direction());
        } else {
            debug!(
                "Ignored {:?}: snake is heading {:?}",
                direction,
                snake.direction()
            );
        }
    }
}
