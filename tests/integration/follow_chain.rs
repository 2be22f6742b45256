//! The assembled game: player plus follow chain under the full plugin set.

use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use follow_chain::gameplay::follow::TrailFollower;
use follow_chain::gameplay::player::Player;

fn create_running_game() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(20)));
    app.add_plugins(follow_chain::plugin);
    app.finish();
    app.cleanup();

    // Loading hands off to InGame on the second frame.
    app.update();
    app.update();
    app
}

fn player_position(app: &mut App) -> Vec2 {
    app.world_mut()
        .query_filtered::<&Transform, With<Player>>()
        .single(app.world())
        .unwrap()
        .translation
        .xy()
}

#[test]
fn followers_record_the_player_trail() {
    let mut app = create_running_game();

    for _ in 0..10 {
        app.update();
    }

    let mut followers = app.world_mut().query::<&TrailFollower>();
    let histories: Vec<usize> = followers
        .iter(app.world())
        .map(|f| f.history().len())
        .collect();
    assert!(!histories.is_empty());
    assert!(histories.iter().all(|&len| len >= 2), "{histories:?}");
}

#[test]
fn head_follower_settles_at_separation_from_idle_player() {
    let mut app = create_running_game();
    let player = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
        .unwrap();

    for _ in 0..150 {
        app.update();
    }

    let player_at = player_position(&mut app);
    let mut followers = app.world_mut().query::<(&TrailFollower, &Transform)>();
    let (head, head_transform) = followers
        .iter(app.world())
        .find(|(f, _)| f.leader() == Some(player))
        .unwrap();
    let separation = head.settings.min_separation;
    let distance = head_transform.translation.xy().distance(player_at);
    assert!(
        (distance - separation).abs() < 0.05,
        "head follower at {distance} from player"
    );
}
