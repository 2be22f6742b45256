//! Gameplay domain plugins: the player, its follow chain, and scene setup.

pub mod follow;
pub mod player;
mod scene;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((follow::plugin, player::plugin, scene::plugin));
}
