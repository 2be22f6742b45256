//! Per-follower trail state and the per-tick update.

use bevy::prelude::*;

use super::history::TrailHistory;

// === Constants ===

/// Default arc-length distance kept behind the leader.
pub const DEFAULT_FOLLOW_DISTANCE: f32 = 1.2;
/// Default closest approach to the resolved trail point.
pub const DEFAULT_MIN_SEPARATION: f32 = 0.6;
/// Default exponential smoothing gain.
pub const DEFAULT_SMOOTHING_RATE: f32 = 10.0;
/// Default seconds between leader samples.
pub const DEFAULT_SAMPLE_INTERVAL_SECS: f32 = 0.02;
/// Default history capacity.
pub const DEFAULT_MAX_SAMPLES: usize = 300;

/// Targets closer than this are left alone by the separation push,
/// since their direction is meaningless.
const SEPARATION_EPSILON: f32 = 1e-4;

// === Settings ===

/// Tuning for one follower.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct FollowSettings {
    /// Distance behind the leader, measured along the leader's path.
    pub follow_distance: f32,
    /// The follower never closes to within this distance of its trail point.
    pub min_separation: f32,
    /// Higher values converge on the trail point faster.
    pub smoothing_rate: f32,
    /// Units per second. `0.0` means uncapped.
    pub max_speed: f32,
    /// Seconds between leader samples. Smaller gives a smoother path at
    /// the cost of more samples for the same trail length.
    pub sample_interval_secs: f32,
    pub max_samples: usize,
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            follow_distance: DEFAULT_FOLLOW_DISTANCE,
            min_separation: DEFAULT_MIN_SEPARATION,
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            max_speed: 0.0,
            sample_interval_secs: DEFAULT_SAMPLE_INTERVAL_SECS,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

// === Component ===

/// Traces a leader's recent path at a fixed distance behind it.
///
/// The leader is any entity with a `Transform`. Both the follower and its
/// leader are expected to be root entities, so `Transform` is world space.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct TrailFollower {
    leader: Option<Entity>,
    pub settings: FollowSettings,
    history: TrailHistory,
    sample_timer_secs: f32,
}

impl TrailFollower {
    #[must_use]
    pub fn new(leader: Option<Entity>, settings: FollowSettings) -> Self {
        Self {
            leader,
            settings,
            history: TrailHistory::with_capacity(settings.max_samples),
            sample_timer_secs: 0.0,
        }
    }

    #[must_use]
    pub const fn leader(&self) -> Option<Entity> {
        self.leader
    }

    /// Bind or unbind the leader. Recorded history is kept, so a rebound
    /// follower first finishes walking the old path.
    pub fn set_leader(&mut self, leader: Option<Entity>) {
        self.leader = leader;
    }

    #[must_use]
    pub const fn history(&self) -> &TrailHistory {
        &self.history
    }

    #[must_use]
    pub const fn sample_timer_secs(&self) -> f32 {
        self.sample_timer_secs
    }

    /// Advance one tick.
    ///
    /// `leader_position` is `None` when no leader is bound or it no longer
    /// exists; the follower then does nothing at all. Returns the new
    /// follower position, or `None` when it should stay where it is.
    pub fn step(&mut self, leader_position: Option<Vec2>, current: Vec2, dt: f32) -> Option<Vec2> {
        let leader_position = leader_position?;
        self.sample(leader_position, dt);

        if self.history.len() < 2 {
            return None;
        }

        let settings = self.settings;
        let resolved = self
            .history
            .point_along(settings.follow_distance.max(0.0))?;
        let target = separated_target(current, resolved, settings.min_separation);

        let alpha = 1.0 - (-settings.smoothing_rate * dt).exp();
        let next = current.lerp(target, alpha);

        Some(cap_displacement(current, next, settings.max_speed * dt, settings.max_speed > 0.0))
    }

    fn sample(&mut self, leader_position: Vec2, dt: f32) {
        if self.history.capacity() != self.settings.max_samples {
            self.history.set_capacity(self.settings.max_samples);
        }
        self.sample_timer_secs += dt.max(0.0);
        if self.sample_timer_secs >= self.settings.sample_interval_secs {
            self.sample_timer_secs = 0.0;
            self.history.record(leader_position);
        }
    }
}

/// Keeps the follower from closing in on its trail point.
///
/// When `resolved` is nearer than `min_separation`, the target is reflected
/// behind the follower so it sits exactly `min_separation` from `resolved`,
/// pulling the follower back out to that ring.
#[must_use]
pub fn separated_target(current: Vec2, resolved: Vec2, min_separation: f32) -> Vec2 {
    let to_resolved = resolved - current;
    let distance = to_resolved.length();
    if distance < min_separation && distance > SEPARATION_EPSILON {
        current - to_resolved / distance * (min_separation - distance)
    } else {
        resolved
    }
}

fn cap_displacement(current: Vec2, next: Vec2, max_step: f32, capped: bool) -> Vec2 {
    let delta = next - current;
    if capped && delta.length() > max_step {
        current + delta.normalize_or_zero() * max_step
    } else {
        next
    }
}
