//! Followers that trace a leader's recent path, chained behind the player.

pub mod chain;
pub mod facing;
pub mod follower;
pub mod history;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

pub use self::chain::{FollowOrder, follow_order};
pub use self::facing::{Facing, FacingFlip};
pub use self::follower::{FollowSettings, TrailFollower};
pub use self::history::TrailHistory;
use crate::screens::GameState;
use crate::{GameSet, Z_FOLLOWER, gameplay_running};

// === Constants ===

/// Side length of a follower sprite in world units.
pub const FOLLOWER_SIZE: f32 = 0.6;

/// Follower color (amber).
const FOLLOWER_COLOR: Color = Color::srgb(0.95, 0.7, 0.2);

// === Resources ===

/// Settings copied into every newly spawned follower.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct FollowConfig {
    pub settings: FollowSettings,
}

// === Spawning ===

/// Spawn a follower entity trailing `leader`.
/// Single source of truth for the follower archetype.
pub fn spawn_follower(
    commands: &mut Commands,
    leader: Option<Entity>,
    position: Vec2,
    settings: FollowSettings,
) -> Entity {
    let entity = commands
        .spawn((
            Name::new("Follower"),
            TrailFollower::new(leader, settings),
            FacingFlip::at(position),
            Sprite::from_color(FOLLOWER_COLOR, Vec2::splat(FOLLOWER_SIZE)),
            Transform::from_xyz(position.x, position.y, Z_FOLLOWER),
            DespawnOnExit(GameState::InGame),
        ))
        .id();
    debug!("spawned follower {entity} behind {leader:?}");
    entity
}

// === Systems ===

/// Moves every follower one tick along its leader's trail.
///
/// Followers are visited in follow-chain order, so each one samples a leader
/// position that was already committed this frame. Runs in `PostUpdate`,
/// after physics has written the player's `Transform` and before transform
/// propagation.
pub(crate) fn update_followers(
    time: Res<Time>,
    mut followers: Query<(Entity, &mut TrailFollower)>,
    mut transforms: Query<&mut Transform>,
    mut facings: Query<(&mut FacingFlip, Option<&mut Sprite>)>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    let order = follow_order(followers.iter().map(|(entity, f)| (entity, f.leader())));
    if order.broken_cycles > 0 {
        warn_once!(
            "{} follow cycle(s) detected; breaking them at the closing link",
            order.broken_cycles
        );
    }

    for entity in order.entities {
        let Ok((_, mut follower)) = followers.get_mut(entity) else {
            continue;
        };
        let leader_position = follower
            .leader()
            .and_then(|leader| transforms.get(leader).ok())
            .map(|transform| transform.translation.xy());
        let Ok(mut transform) = transforms.get_mut(entity) else {
            continue;
        };

        let current = transform.translation.xy();
        let Some(next) = follower.step(leader_position, current, dt) else {
            continue;
        };
        transform.translation.x = next.x;
        transform.translation.y = next.y;

        let Ok((mut flip, sprite)) = facings.get_mut(entity) else {
            continue;
        };
        if let (Some(facing), Some(mut sprite)) = (flip.observe(next, now), sprite) {
            sprite.flip_x = facing.flip_x();
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<TrailFollower>()
        .register_type::<FacingFlip>()
        .register_type::<FollowConfig>()
        .init_resource::<FollowConfig>();

    app.configure_sets(
        PostUpdate,
        GameSet::Follow.before(TransformSystems::Propagate),
    );
    app.add_systems(
        PostUpdate,
        update_followers
            .in_set(GameSet::Follow)
            .run_if(gameplay_running),
    );
}
