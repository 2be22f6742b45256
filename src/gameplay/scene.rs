//! Spawns the player and its follow chain when a game starts.

use bevy::prelude::*;

use super::follow::{FollowConfig, spawn_follower};
use super::player::spawn_player;
use crate::screens::GameState;

/// Followers spawned behind the player at game start.
pub const CHAIN_LENGTH: usize = 4;

fn spawn_scene(mut commands: Commands, config: Res<FollowConfig>) {
    let settings = config.settings;
    let player = spawn_player(&mut commands, Vec2::ZERO);

    let mut leader = player;
    for link in 1..=CHAIN_LENGTH {
        #[allow(clippy::cast_precision_loss)]
        let x = -(link as f32) * settings.follow_distance;
        leader = spawn_follower(&mut commands, Some(leader), Vec2::new(x, 0.0), settings);
    }
    info!("spawned player with a chain of {CHAIN_LENGTH} followers");
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::follow::{self, TrailFollower};
    use crate::gameplay::player::Player;
    use crate::testing::{assert_entity_count, create_base_test_app, transition_to_ingame};
    use pretty_assertions::assert_eq;

    fn create_scene_test_app() -> App {
        let mut app = create_base_test_app();
        app.init_resource::<FollowConfig>();
        app.add_plugins(plugin);
        app
    }

    #[test]
    fn entering_game_spawns_player_and_chain() {
        let mut app = create_scene_test_app();
        transition_to_ingame(&mut app);

        assert_entity_count::<With<Player>>(&mut app, 1);
        assert_entity_count::<With<TrailFollower>>(&mut app, CHAIN_LENGTH);
    }

    #[test]
    fn chain_links_each_follower_to_the_previous() {
        let mut app = create_scene_test_app();
        transition_to_ingame(&mut app);

        let player = app
            .world_mut()
            .query_filtered::<Entity, With<Player>>()
            .single(app.world())
            .unwrap();
        let links: Vec<(Entity, Option<Entity>)> = app
            .world_mut()
            .query::<(Entity, &TrailFollower)>()
            .iter(app.world())
            .map(|(entity, f)| (entity, f.leader()))
            .collect();

        let order = follow::follow_order(links.iter().copied());
        assert_eq!(order.broken_cycles, 0);
        assert_eq!(order.entities.len(), CHAIN_LENGTH);

        // Walking the order from the head must follow leader links back to the player.
        let mut expected_leader = player;
        for entity in order.entities {
            let leader = links.iter().find(|(e, _)| *e == entity).unwrap().1;
            assert_eq!(leader, Some(expected_leader));
            expected_leader = entity;
        }
    }

    #[test]
    fn followers_start_spaced_behind_the_player() {
        let mut app = create_scene_test_app();
        transition_to_ingame(&mut app);

        let spacing = app.world().resource::<FollowConfig>().settings.follow_distance;
        let player_position = app
            .world_mut()
            .query_filtered::<&Transform, With<Player>>()
            .single(app.world())
            .unwrap()
            .translation
            .xy();
        assert_eq!(player_position, Vec2::ZERO);

        let links: Vec<(Entity, Option<Entity>)> = app
            .world_mut()
            .query::<(Entity, &TrailFollower)>()
            .iter(app.world())
            .map(|(entity, f)| (entity, f.leader()))
            .collect();
        let order = follow::follow_order(links);

        for (index, entity) in order.entities.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = Vec2::new(-((index + 1) as f32) * spacing, 0.0);
            let position = app.world().get::<Transform>(entity).unwrap().translation.xy();
            assert!(
                position.distance(expected) < 1e-5,
                "link {index} at {position}, expected {expected}"
            );
        }
    }

    #[test]
    fn leaving_game_despawns_scene() {
        let mut app = create_scene_test_app();
        transition_to_ingame(&mut app);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Loading);
        app.update();

        assert_entity_count::<With<Player>>(&mut app, 0);
        assert_entity_count::<With<TrailFollower>>(&mut app, 0);
    }
}
