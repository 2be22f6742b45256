//! Bounded record of a leader's recent positions, newest first.

use std::collections::VecDeque;

use bevy::prelude::*;

/// Segments shorter than this are stretched to it when interpolating,
/// so repeated samples never divide by zero.
pub const SEGMENT_EPSILON: f32 = 1e-4;

/// Leader positions ordered from most recent (index 0) to oldest.
///
/// Holds at most `capacity` samples; recording past capacity evicts the oldest.
#[derive(Debug, Clone, Default, Reflect)]
pub struct TrailHistory {
    samples: VecDeque<Vec2>,
    capacity: usize,
}

impl TrailHistory {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a sample, dropping the oldest one if over capacity.
    pub fn record(&mut self, position: Vec2) {
        if self.capacity == 0 {
            return;
        }
        self.samples.push_front(position);
        self.samples.truncate(self.capacity);
    }

    /// Change the capacity, discarding the oldest samples that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.samples.truncate(capacity);
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn newest(&self) -> Option<Vec2> {
        self.samples.front().copied()
    }

    #[must_use]
    pub fn oldest(&self) -> Option<Vec2> {
        self.samples.back().copied()
    }

    /// Samples from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.samples.iter().copied()
    }

    /// Total length of the recorded path.
    #[must_use]
    pub fn path_length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// The point `distance` back along the recorded path, measured from the
    /// newest sample.
    ///
    /// Walks segments newest to oldest and interpolates inside the segment
    /// that reaches `distance`. When the whole path is shorter, returns the
    /// oldest sample. `None` only when nothing has been recorded.
    #[must_use]
    pub fn point_along(&self, distance: f32) -> Option<Vec2> {
        let oldest = self.oldest()?;
        let mut traveled = 0.0;
        for (a, b) in self.segments() {
            let seg = a.distance(b);
            if traveled + seg >= distance {
                let t = (distance - traveled) / seg.max(SEGMENT_EPSILON);
                return Some(a.lerp(b, t));
            }
            traveled += seg;
        }
        Some(oldest)
    }

    fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.iter().zip(self.iter().skip(1))
    }
}
