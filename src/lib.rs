//! Pixel Runner - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//!
//! Everything visual lives outside this crate: the presentation layer reads
//! an immutable [`sim::RenderSnapshot`] once per frame and feeds abstract
//! directional input back in. The simulation never touches a clock or the
//! DOM; the caller supplies wall-clock milliseconds to each tick.

pub mod sim;

pub use sim::{GamePhase, GameState, RenderSnapshot, TickInput, tick};

/// Game tuning constants
pub mod consts {
    /// Downward acceleration, px/tick² (velocities are in per-tick units)
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal run speed, px/tick
    pub const MOVE_SPEED: f32 = 5.0;
    /// Upward jump impulse, px/tick (negative = up, y grows downward)
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Player bounding box is a square of this side
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Enemy bounding box side
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Coin bounding box side
    pub const COIN_SIZE: f32 = 20.0;

    /// Enemy leftward patrol speed, px/tick
    pub const ENEMY_SPEED: f32 = 3.0;
    /// Vertical weave amplitude of the enemy patrol, px
    pub const ENEMY_WEAVE_AMPLITUDE: f32 = 2.0;
    /// Weave angular frequency, radians per millisecond of wall-clock time
    pub const ENEMY_WEAVE_FREQ: f32 = 0.005;

    /// Starting lives per session
    pub const STARTING_LIVES: u32 = 3;
    /// Points awarded per collected coin
    pub const COIN_SCORE: u32 = 100;
    /// Points deducted per damage event (floored at zero)
    pub const DAMAGE_PENALTY: u32 = 50;
    /// Points awarded per committed collision-free tick
    pub const PROGRESS_SCORE: u32 = 1;

    /// Damage-immunity window after a hit, milliseconds
    pub const INVULNERABILITY_MS: f64 = 1000.0;
    /// Lifetime of transient pickup/damage notifications, milliseconds
    pub const NOTIFICATION_MS: f64 = 1000.0;
}
