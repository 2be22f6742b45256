//! Testing utilities for Bevy systems.

#![cfg(test)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use crate::screens::{GameState, InGameState};

/// Fixed frame length used by test apps, matching the default sample interval.
pub const TEST_FRAME: Duration = Duration::from_millis(20);

/// Creates a minimal app whose clock advances exactly `TEST_FRAME` per update.
/// The very first update still reports a zero delta.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TEST_FRAME));
    app
}

/// Test app with game states and keyboard input, but no screen plugins.
pub fn create_base_test_app() -> App {
    let mut app = create_test_app();
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.add_sub_state::<InGameState>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app
}

/// Test app running only the follow system.
pub fn create_follow_test_app() -> App {
    let mut app = create_test_app();
    app.add_systems(PostUpdate, crate::gameplay::follow::update_followers);
    app
}

/// Enter `GameState::InGame` and run its `OnEnter` systems.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Advance the app by one frame.
pub fn tick(app: &mut App) {
    app.update();
}

/// Advance the app by multiple frames.
pub fn tick_multiple(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

/// Tap a key for one frame, then run one more frame so any state change it
/// requested is applied.
pub fn press_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
    app.update();
}

/// Spawn a bare leader: anything with a `Transform` can be followed.
pub fn spawn_leader(world: &mut World, position: Vec2) -> Entity {
    world.spawn(Transform::from_translation(position.extend(0.0))).id()
}

/// Assert the number of entities matching filter `F`.
pub fn assert_entity_count<F: bevy::ecs::query::QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<(), F>();
    let count = query.iter(app.world()).count();
    assert_eq!(count, expected, "unexpected entity count");
}
