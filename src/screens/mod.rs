//! Game states and the screens that drive them.

mod in_game;
mod loading;

use bevy::prelude::*;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// Player and follow chain are live.
    InGame,
}

/// Sub-states within `InGame`. Only exists while `GameState::InGame` is active.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum InGameState {
    /// Normal gameplay.
    #[default]
    Playing,
    /// Virtual time is stopped; nothing moves.
    Paused,
}

pub(super) fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_sub_state::<InGameState>();
    app.add_plugins((loading::plugin, in_game::plugin));
}
