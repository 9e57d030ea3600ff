//! Bounding-box collision passes.

use crate::entities::{Alien, Bullet, Ship};

/// Outcome of one bullet-vs-fleet pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionBatch {
    /// Aliens destroyed by each bullet that hit something. An alien belongs
    /// to the first bullet that reached it.
    pub hits_per_bullet: Vec<usize>,
    /// Distinct aliens removed.
    pub aliens_destroyed: usize,
}

impl CollisionBatch {
    pub fn is_empty(&self) -> bool {
        self.hits_per_bullet.is_empty()
    }

    /// `alien_points` for every destroyed alien, saturating at `u32::MAX`.
    pub fn points(&self, alien_points: u32) -> u32 {
        let destroyed = u32::try_from(self.aliens_destroyed).unwrap_or(u32::MAX);
        alien_points.saturating_mul(destroyed)
    }
}

/// Remove every overlapping bullet/alien pair in a single pass.
///
/// Bullets are resolved in order. A bullet destroys every live alien it
/// overlaps; an alien already destroyed by an earlier bullet is gone, so a
/// later bullet that only overlaps it survives.
pub fn resolve_bullet_alien_collisions(
    bullets: &mut Vec<Bullet>,
    aliens: &mut Vec<Alien>,
) -> CollisionBatch {
    let mut batch = CollisionBatch::default();
    let mut dead_aliens = vec![false; aliens.len()];
    let mut dead_bullets = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let mut hits = 0;
        for (ai, alien) in aliens.iter().enumerate() {
            if !dead_aliens[ai] && bullet.rect.overlaps(&alien.rect) {
                dead_aliens[ai] = true;
                hits += 1;
            }
        }
        if hits > 0 {
            dead_bullets[bi] = true;
            batch.hits_per_bullet.push(hits);
        }
    }

    batch.aliens_destroyed = dead_aliens.iter().filter(|&&dead| dead).count();
    if !batch.is_empty() {
        let mut i = 0;
        bullets.retain(|_| {
            i += 1;
            !dead_bullets[i - 1]
        });
        let mut i = 0;
        aliens.retain(|_| {
            i += 1;
            !dead_aliens[i - 1]
        });
    }
    batch
}

pub fn ship_collides(ship: &Ship, aliens: &[Alien]) -> bool {
    aliens.iter().any(|a| a.rect.overlaps(&ship.rect))
}
