//! Core game module containing the board, session resources, events, constants, and the tick rule.

mod components;
mod constants;
mod events;
mod resources;
mod rules;
mod schedule;

pub use components::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
pub use rules::*;
pub use schedule::*;
