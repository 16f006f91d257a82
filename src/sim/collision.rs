//! Collision resolution for the candidate player state
//!
//! Checks run in a fixed priority order every tick: platform landing first
//! (so a platform can host an obstacle-free rest point), then the lethal
//! shapes - obstacles, holes, enemy - where the first hit wins. Coin pickup
//! is independent and only ever applies to an accepted candidate.

use super::level::Level;
use super::state::{Coin, EnemyState, PlayerState};
use crate::consts::PLAYER_SIZE;

/// Which hazard rejected the candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Obstacle,
    Hole,
    Enemy,
}

/// Outcome of resolving one candidate against the world
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Candidate accepted (possibly snapped onto a platform), with the ids
    /// of uncollected coins it overlaps
    Committed {
        player: PlayerState,
        coins_hit: Vec<u32>,
    },
    /// Candidate rejected wholesale; the previous position stands this tick
    Hazard(HazardKind),
}

/// Resolve a candidate player state against level geometry, the enemy, and
/// the coin field.
pub fn resolve(
    mut candidate: PlayerState,
    level: &Level,
    enemy: &EnemyState,
    coins: &[Coin],
) -> Resolution {
    // 1. Platform landing: a descending bottom edge inside a platform's top
    //    band snaps to rest on it. Resolved before hazard checks.
    if candidate.vel.y >= 0.0 {
        let bottom = candidate.pos.y + PLAYER_SIZE;
        for plat in &level.platforms {
            let in_band = bottom >= plat.y && bottom <= plat.bottom();
            if in_band && candidate.bounds().overlaps_horizontally(plat) {
                candidate.pos.y = plat.y - PLAYER_SIZE;
                candidate.vel.y = 0.0;
                candidate.is_jumping = false;
                break;
            }
        }
    }

    let bounds = candidate.bounds();

    // 2. Obstacles: any overlap is a hit
    if level.obstacles.iter().any(|o| bounds.overlaps(o)) {
        return Resolution::Hazard(HazardKind::Obstacle);
    }

    // 3. Holes: horizontal span over the pit with the bottom edge at or
    //    below its mouth is lethal regardless of overlap depth
    for hole in &level.holes {
        if bounds.overlaps_horizontally(hole) && bounds.bottom() >= hole.y {
            return Resolution::Hazard(HazardKind::Hole);
        }
    }

    // 4. Enemy
    if bounds.overlaps(&enemy.bounds()) {
        return Resolution::Hazard(HazardKind::Enemy);
    }

    // 5. Coin pickup, only on the accepted candidate
    let coins_hit = coins
        .iter()
        .filter(|c| !c.collected && bounds.overlaps(&c.bounds()))
        .map(|c| c.id)
        .collect();

    Resolution::Committed {
        player: candidate,
        coins_hit,
    }
}
