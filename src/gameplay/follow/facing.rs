//! Left/right facing derived from horizontal motion.

use bevy::prelude::*;

/// Default horizontal movement per tick that counts as a turn.
pub const DEFAULT_FLIP_DEADZONE: f32 = 0.03;
/// Default length of the post-turn window reported by `recently_turned`.
pub const DEFAULT_FLIP_HOLD_SECS: f32 = 0.08;

/// Horizontal facing. Sprites face right unflipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Value for `Sprite::flip_x`.
    #[must_use]
    pub const fn flip_x(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Tracks the last observed position and flips facing when the entity
/// moves far enough left or right in one tick.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct FacingFlip {
    pub deadzone: f32,
    pub hold_secs: f32,
    last_position: Vec2,
    facing: Option<Facing>,
    last_turn_secs: f32,
}

impl FacingFlip {
    /// Start tracking from `position` with default thresholds.
    #[must_use]
    pub const fn at(position: Vec2) -> Self {
        Self {
            deadzone: DEFAULT_FLIP_DEADZONE,
            hold_secs: DEFAULT_FLIP_HOLD_SECS,
            last_position: position,
            facing: None,
            last_turn_secs: 0.0,
        }
    }

    #[must_use]
    pub const fn facing(&self) -> Option<Facing> {
        self.facing
    }

    /// Elapsed-time stamp of the last tick that moved past the deadzone.
    #[must_use]
    pub const fn last_turn_secs(&self) -> f32 {
        self.last_turn_secs
    }

    /// Whether the last deadzone-crossing move happened within `hold_secs`.
    /// Informational only: flips are never held back.
    #[must_use]
    pub fn recently_turned(&self, now_secs: f32) -> bool {
        self.facing.is_some() && now_secs - self.last_turn_secs <= self.hold_secs
    }

    /// Record a new position at `now_secs` and return the facing to show.
    ///
    /// `None` until the entity has moved past the deadzone at least once.
    pub fn observe(&mut self, position: Vec2, now_secs: f32) -> Option<Facing> {
        let dx = position.x - self.last_position.x;
        if dx <= -self.deadzone {
            self.facing = Some(Facing::Left);
            self.last_turn_secs = now_secs;
        } else if dx >= self.deadzone {
            self.facing = Some(Facing::Right);
            self.last_turn_secs = now_secs;
        }
        self.last_position = position;
        self.facing
    }
}
