//! Avian2d physics configuration for top-down movement.
//!
//! Only the player is a physics body. Followers are placed directly by the
//! follow system and carry no collider, so they never push the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::player::PLAYER_SIZE;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(PLAYER_SIZE));
    app.insert_resource(Gravity::ZERO);
}
