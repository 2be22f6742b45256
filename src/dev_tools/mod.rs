//! Development tools — only included with `cargo run --features dev`.
//!
//! F grows the follow chain by one link, X cuts the last link loose.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::Rng;

use crate::gameplay::follow::{FollowConfig, TrailFollower, follow_order, spawn_follower};
use crate::gameplay::player::Player;
use crate::{GameSet, gameplay_running};

/// Largest random offset from the tail when appending a follower.
const SPAWN_JITTER: f32 = 0.5;

/// The deepest follower whose leader links lead back to `player`.
/// Detached followers and their own trailing chains are skipped.
fn chain_tail(followers: &Query<(Entity, &mut TrailFollower)>, player: Entity) -> Option<Entity> {
    let links: Vec<(Entity, Option<Entity>)> = followers
        .iter()
        .map(|(entity, f)| (entity, f.leader()))
        .collect();

    let mut attached = HashSet::from([player]);
    let mut tail = None;
    // Leaders come first, so one pass marks every attached follower.
    for entity in follow_order(links.iter().copied()).entities {
        let leader = links
            .iter()
            .find(|(e, _)| *e == entity)
            .and_then(|(_, leader)| *leader);
        if leader.is_some_and(|leader| attached.contains(&leader)) {
            attached.insert(entity);
            tail = Some(entity);
        }
    }
    tail
}

fn debug_chain_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<FollowConfig>,
    player: Query<Entity, With<Player>>,
    mut followers: Query<(Entity, &mut TrailFollower)>,
    transforms: Query<&Transform>,
    mut commands: Commands,
) {
    let Some(player) = player.iter().next() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyF) {
        let leader = chain_tail(&followers, player).unwrap_or(player);
        let Ok(leader_transform) = transforms.get(leader) else {
            return;
        };
        let mut rng = rand::rng();
        let jitter = Vec2::new(
            rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
            rng.random_range(-SPAWN_JITTER..=SPAWN_JITTER),
        );
        let position = leader_transform.translation.xy() + jitter;
        spawn_follower(&mut commands, Some(leader), position, config.settings);
    }

    if keyboard.just_pressed(KeyCode::KeyX) {
        let Some(tail) = chain_tail(&followers, player) else {
            return;
        };
        if let Ok((_, mut follower)) = followers.get_mut(tail) {
            debug!("detaching follower {tail} from {:?}", follower.leader());
            follower.set_leader(None);
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        debug_chain_controls
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
}
