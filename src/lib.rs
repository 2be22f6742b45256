//! Top-down follow-the-leader game library.

pub mod camera;
#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod screens;
#[cfg(test)]
pub mod testing;
mod third_party;

use bevy::prelude::*;

pub use crate::screens::{GameState, InGameState};

/// Z layer for follower sprites, drawn beneath the player.
pub const Z_FOLLOWER: f32 = 1.0;
/// Z layer for the player sprite.
pub const Z_PLAYER: f32 = 2.0;

/// Ordering of gameplay work within a frame.
///
/// `Input` runs in `Update`, `Movement` in `FixedUpdate` ahead of the physics
/// step, and `Follow` in `PostUpdate` once every leader has moved.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Movement,
    Follow,
}

/// Run condition: gameplay is active and not paused.
#[must_use]
pub fn gameplay_running(state: Option<Res<State<InGameState>>>) -> bool {
    state.is_some_and(|state| *state.get() == InGameState::Playing)
}

pub fn plugin(app: &mut App) {
    app.add_plugins((
        third_party::plugin,
        screens::plugin,
        camera::plugin,
        gameplay::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
