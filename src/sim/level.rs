//! Static level geometry derived from viewport dimensions
//!
//! The layout is a one-time configuration snapshot: computed from the
//! viewport at session start, then frozen. The simulation never re-reads
//! window dimensions mid-run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Coin, RngState};
use crate::consts::*;

/// Viewport dimensions captured at session start
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
}

/// Configuration fault at session start
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Viewport dimensions were non-positive or non-finite
    InvalidViewport { width: f32, height: f32 },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::InvalidViewport { width, height } => {
                write!(f, "viewport must be positive and finite, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Immutable level geometry
///
/// Coordinates are screen-space: y grows downward, the floor is near
/// `height`. `floor_y` is the y of the player's *top* edge when grounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    /// Player top-edge y when resting on the ground
    pub floor_y: f32,
    /// Player respawn point (top-left corner)
    pub spawn: Vec2,
    pub obstacles: Vec<Rect>,
    pub holes: Vec<Rect>,
    pub platforms: Vec<Rect>,
    /// Vertical band `[min, max]` for enemy respawn y
    pub enemy_band: (f32, f32),
    /// Enemy wraps to the right edge once its x falls below this
    pub patrol_bound_left: f32,
}

impl Level {
    /// Build the level layout from viewport dimensions.
    ///
    /// Out-of-range dimensions are a configuration fault surfaced here,
    /// never handled mid-tick.
    pub fn from_viewport(cfg: &ViewportConfig) -> Result<Self, LevelError> {
        let (w, h) = (cfg.width, cfg.height);
        if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
            return Err(LevelError::InvalidViewport {
                width: w,
                height: h,
            });
        }

        let floor_y = h - 100.0;

        let obstacles = vec![
            Rect::new(w * 0.3, h - 80.0, 30.0, 30.0),
            Rect::new(w * 0.6, h - 80.0, 30.0, 30.0),
        ];
        // Pits flush with the bottom edge
        let holes = vec![
            Rect::new(w * 0.45, h - 10.0, 100.0, 10.0),
            Rect::new(w * 0.75, h - 10.0, 100.0, 10.0),
        ];
        let platforms = vec![
            Rect::new(w * 0.25, h - 220.0, 100.0, 15.0),
            Rect::new(w * 0.50, h - 280.0, 100.0, 15.0),
            Rect::new(w * 0.70, h - 200.0, 100.0, 15.0),
        ];

        let level = Self {
            width: w,
            height: h,
            floor_y,
            spawn: Vec2::new(50.0, floor_y),
            obstacles,
            holes,
            platforms,
            enemy_band: (h - 300.0, h - 150.0),
            patrol_bound_left: -ENEMY_SIZE,
        };

        log::info!(
            "Level built for {w}x{h}: {} obstacles, {} holes, {} platforms",
            level.obstacles.len(),
            level.holes.len(),
            level.platforms.len()
        );

        Ok(level)
    }

    /// Rightmost x the player's top-left corner can reach; touching it wins.
    #[inline]
    pub fn right_boundary(&self) -> f32 {
        self.width - PLAYER_SIZE
    }

    /// Generate the coin field: one coin hovering above each platform, with
    /// the x offset randomized within the platform's width.
    pub fn prime_coins(&self, rng: &mut RngState) -> Vec<Coin> {
        self.platforms
            .iter()
            .enumerate()
            .map(|(i, plat)| {
                let x = plat.x + rng.next_range(0.0, plat.width - COIN_SIZE);
                Coin {
                    id: i as u32,
                    pos: Vec2::new(x, plat.y - 50.0),
                    collected: false,
                }
            })
            .collect()
    }
}
