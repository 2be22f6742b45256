//! In-game screen: pause toggle, pause overlay, restart.
//!
//! Pausing stops virtual time, so physics and the follow system both see a
//! zero delta until play resumes.

use bevy::prelude::*;

use super::{GameState, InGameState};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(InGameState::Paused), (pause_time, setup_pause_overlay))
        .add_systems(OnExit(InGameState::Paused), resume_time)
        .add_systems(
            Update,
            handle_game_input.run_if(in_state(GameState::InGame)),
        );
}

fn handle_game_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<InGameState>>,
    mut next_ingame_state: ResMut<NextState<InGameState>>,
    mut next_game_state: ResMut<NextState<GameState>>,
) {
    match current_state.get() {
        InGameState::Playing => {
            if keyboard.just_pressed(KeyCode::Escape) {
                next_ingame_state.set(InGameState::Paused);
            }
        }
        InGameState::Paused => {
            if keyboard.just_pressed(KeyCode::Escape) {
                next_ingame_state.set(InGameState::Playing);
            }
            if keyboard.just_pressed(KeyCode::KeyQ) {
                info!("restarting");
                next_game_state.set(GameState::Loading);
            }
        }
    }
}

fn pause_time(mut time: ResMut<Time<Virtual>>) {
    info!("paused");
    time.pause();
}

fn resume_time(mut time: ResMut<Time<Virtual>>) {
    info!("resumed");
    time.unpause();
}

fn setup_pause_overlay(mut commands: Commands) {
    // Semi-transparent overlay
    commands.spawn((
        Name::new("Pause Overlay"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        DespawnOnExit(InGameState::Paused),
    ));

    commands.spawn((
        Text::new("PAUSED\nESC to resume | Q to restart"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Percent(40.0),
            top: Val::Percent(40.0),
            ..default()
        },
        DespawnOnExit(InGameState::Paused),
    ));
}
