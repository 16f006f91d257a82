//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick units (no frame-rate dependence in the integration)
//! - Seeded RNG only
//! - Timed behavior is timestamped state evaluated against the caller's
//!   clock, never a background timer
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod physics;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{HazardKind, Resolution, resolve};
pub use level::{Level, LevelError, ViewportConfig};
pub use physics::integrate;
pub use rect::Rect;
pub use snapshot::RenderSnapshot;
pub use state::{
    Coin, EnemyState, GamePhase, GameState, Notification, NotificationKind, PlayerState, RngState,
};
pub use tick::{TickInput, tick};
