//! Read-only view of the simulation for the presentation layer
//!
//! Borrowed and immutable: a renderer takes one snapshot per frame and can
//! never write back into the simulation through it.

use serde::Serialize;

use super::rect::Rect;
use super::state::{Coin, EnemyState, GamePhase, GameState, Notification, PlayerState};

/// Everything a presentation frame needs, captured between ticks
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot<'a> {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    pub elapsed_seconds: u32,
    pub player: &'a PlayerState,
    pub enemy: &'a EnemyState,
    /// Active (uncollected) coins only
    pub coins: Vec<&'a Coin>,
    pub obstacles: &'a [Rect],
    pub holes: &'a [Rect],
    pub platforms: &'a [Rect],
    pub notification: Option<&'a Notification>,
}

impl GameState {
    /// Capture an immutable view of the current state
    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            phase: self.phase,
            lives: self.lives,
            score: self.score,
            elapsed_seconds: self.elapsed_seconds,
            player: &self.player,
            enemy: &self.enemy,
            coins: self.active_coins().collect(),
            obstacles: &self.level.obstacles,
            holes: &self.level.holes,
            platforms: &self.level.platforms,
            notification: self.notification.as_ref(),
        }
    }
}
