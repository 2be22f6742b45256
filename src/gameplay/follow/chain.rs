//! Update ordering for follow chains.
//!
//! A follower must sample its leader after the leader has moved this frame.
//! Each follower gets a depth: 0 when its leader is not itself a follower
//! (the player, a missing entity, or nothing), otherwise one more than its
//! leader's depth. Updating in ascending depth visits every leader first.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

/// Followers in update order, plus how many leader cycles had to be broken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowOrder {
    pub entities: Vec<Entity>,
    pub broken_cycles: usize,
}

/// Order `(follower, leader)` links so leaders come before their followers.
///
/// A cycle is broken at the link that closes it: the follower whose leader
/// was already on the walk is treated as depth 0 and reads its leader's
/// position from the previous frame. Walks start from the lowest entity, so
/// the same links always break at the same place. Ties are ordered by entity.
#[must_use]
pub fn follow_order(links: impl IntoIterator<Item = (Entity, Option<Entity>)>) -> FollowOrder {
    let leaders: HashMap<Entity, Option<Entity>> = links.into_iter().collect();
    let mut entities: Vec<Entity> = leaders.keys().copied().collect();
    entities.sort_unstable();

    let mut depths: HashMap<Entity, usize> = HashMap::with_capacity(leaders.len());
    let mut broken_cycles = 0;

    let mut walk = Vec::new();
    let mut on_walk = HashSet::new();
    for &start in &entities {
        walk.clear();
        on_walk.clear();

        let mut cursor = start;
        let mut depth = loop {
            if let Some(&known) = depths.get(&cursor) {
                break known + 1;
            }
            if !on_walk.insert(cursor) {
                broken_cycles += 1;
                break 0;
            }
            walk.push(cursor);
            match leaders.get(&cursor).copied().flatten() {
                Some(leader) if leaders.contains_key(&leader) => cursor = leader,
                _ => break 0,
            }
        };

        for &entity in walk.iter().rev() {
            depths.insert(entity, depth);
            depth += 1;
        }
    }

    entities.sort_by_key(|entity| (depths.get(entity).copied().unwrap_or_default(), *entity));
    FollowOrder {
        entities,
        broken_cycles,
    }
}
