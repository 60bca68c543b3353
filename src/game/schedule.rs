//! Frame ordering shared by the plugins.

use bevy::prelude::*;

/// Input is read before the tick, and the tick runs before drawing.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSystems {
    Input,
    Tick,
    Render,
}
