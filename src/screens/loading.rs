//! Loading screen. Nothing to load yet, so it hands off to the game at once.

use bevy::prelude::*;

use super::GameState;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        check_loading_complete.run_if(in_state(GameState::Loading)),
    );
}

fn check_loading_complete(mut next_state: ResMut<NextState<GameState>>) {
    info!("loading complete, starting game");
    next_state.set(GameState::InGame);
}
