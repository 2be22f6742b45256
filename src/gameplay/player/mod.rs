//! The keyboard-driven leader at the head of the follow chain.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gameplay::follow::Facing;
use crate::screens::GameState;
use crate::{GameSet, Z_PLAYER, gameplay_running};

// === Constants ===

/// Side length of the player sprite in world units.
pub const PLAYER_SIZE: f32 = 0.8;

/// Player color (teal).
const PLAYER_COLOR: Color = Color::srgb(0.2, 0.75, 0.8);

/// Input below this squared length counts as no input; the player stops dead.
const INPUT_DEADZONE_SQUARED: f32 = 1e-4;

// === Components ===

/// Marker for the player entity.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Movement requested by input this frame.
/// Written in `GameSet::Input`, consumed in `GameSet::Movement`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveIntent {
    /// Direction with length at most 1.
    pub axis: Vec2,
    pub sprinting: bool,
}

// === Resources ===

/// Player movement tuning.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct PlayerTuning {
    /// Walking speed in units per second.
    pub move_speed: f32,
    pub sprint_multiplier: f32,
    /// Velocity change per second while steering toward the input velocity.
    pub acceleration: f32,
    /// Horizontal input needed before the sprite turns.
    pub mirror_deadzone: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            sprint_multiplier: 1.6,
            acceleration: 35.0,
            mirror_deadzone: 0.05,
        }
    }
}

impl PlayerTuning {
    #[must_use]
    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.move_speed * self.sprint_multiplier
        } else {
            self.move_speed
        }
    }

    /// Facing implied by horizontal input, or `None` inside the deadzone.
    #[must_use]
    pub fn facing_for(&self, axis: Vec2) -> Option<Facing> {
        if axis.x > self.mirror_deadzone {
            Some(Facing::Right)
        } else if axis.x < -self.mirror_deadzone {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

// === Movement math ===

/// Unit-clamped direction from WASD and arrow keys.
#[must_use]
pub fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> Vec2 {
    let mut axis = Vec2::ZERO;
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        axis.x += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        axis.x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        axis.y += 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        axis.y -= 1.0;
    }
    axis.clamp_length_max(1.0)
}

/// Next velocity: zero without input, otherwise `current` moved toward
/// `axis * speed` by at most `max_change`.
#[must_use]
pub fn steer_velocity(current: Vec2, axis: Vec2, speed: f32, max_change: f32) -> Vec2 {
    if axis.length_squared() < INPUT_DEADZONE_SQUARED {
        return Vec2::ZERO;
    }
    current.move_towards(axis * speed, max_change)
}

// === Spawning ===

/// Spawn the player entity.
pub fn spawn_player(commands: &mut Commands, position: Vec2) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Player,
            MoveIntent::default(),
            Sprite::from_color(PLAYER_COLOR, Vec2::splat(PLAYER_SIZE)),
            Transform::from_xyz(position.x, position.y, Z_PLAYER),
            DespawnOnExit(GameState::InGame),
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::circle(PLAYER_SIZE / 2.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::ZERO,
        ))
        .id()
}

// === Systems ===

/// Reads the keyboard into `MoveIntent` and turns the sprite.
/// Runs in `GameSet::Input`.
fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<PlayerTuning>,
    mut players: Query<(&mut MoveIntent, &mut Sprite), With<Player>>,
) {
    let axis = keyboard_axis(&keyboard);
    let sprinting = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    for (mut intent, mut sprite) in &mut players {
        *intent = MoveIntent { axis, sprinting };
        if let Some(facing) = tuning.facing_for(axis) {
            sprite.flip_x = facing.flip_x();
        }
    }
}

/// Steers `LinearVelocity` toward the requested velocity.
/// Runs in `GameSet::Movement` on the fixed timestep.
fn apply_move_velocity(
    time: Res<Time>,
    tuning: Res<PlayerTuning>,
    mut players: Query<(&MoveIntent, &mut LinearVelocity), With<Player>>,
) {
    let max_change = tuning.acceleration * time.delta_secs();
    for (intent, mut velocity) in &mut players {
        velocity.0 = steer_velocity(
            velocity.0,
            intent.axis,
            tuning.speed(intent.sprinting),
            max_change,
        );
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Player>()
        .register_type::<MoveIntent>()
        .register_type::<PlayerTuning>()
        .init_resource::<PlayerTuning>();

    app.add_systems(
        Update,
        read_move_input
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
    app.add_systems(
        FixedUpdate,
        apply_move_velocity
            .in_set(GameSet::Movement)
            .run_if(gameplay_running),
    );
}
