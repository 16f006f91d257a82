//! Game state and core simulation types
//!
//! One `GameState` is live per playthrough. Every mutation funnels through
//! the tick function; timed behavior (invulnerability, notifications) is
//! timestamped state compared against the caller's clock each tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelError, ViewportConfig};
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session constructed, waiting for an explicit start
    NotStarted,
    /// Active gameplay
    Playing,
    /// Out of lives
    Lost,
    /// Reached the right edge of the level
    Won,
}

/// Seeded RNG wrapper that stays serializable
///
/// Holds the seed plus a draw counter instead of a live generator, so state
/// snapshots stay plain data while every draw remains reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Uniform f32 in [0, 1). Each call advances the stream.
    pub fn next_unit(&mut self) -> f32 {
        let mut rng =
            Pcg32::seed_from_u64(self.seed ^ self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.draws += 1;
        rng.random::<f32>()
    }

    /// Uniform f32 in [lo, hi)
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }
}

/// The player's physical state - pure data, mutated once per tick
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    /// Top-left corner of the player's bounding box
    pub pos: Vec2,
    /// Per-tick velocity
    pub vel: Vec2,
    pub is_jumping: bool,
    pub is_moving: bool,
    /// Damage immunity expires at this wall-clock instant (ms); 0 = never hit
    pub invulnerable_until: f64,
}

impl PlayerState {
    /// Fresh player at the level spawn point
    pub fn at_spawn(level: &Level) -> Self {
        Self {
            pos: level.spawn,
            vel: Vec2::ZERO,
            is_jumping: false,
            is_moving: false,
            invulnerable_until: 0.0,
        }
    }

    /// Whether the damage-immunity window is open at `now_ms`
    #[inline]
    pub fn is_invulnerable(&self, now_ms: f64) -> bool {
        now_ms < self.invulnerable_until
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, PLAYER_SIZE)
    }
}

/// The patrolling hazard
///
/// Purely kinematic: sweeps leftward with a small sinusoidal weave, ignores
/// geometry, and wraps to the right edge with a fresh random altitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyState {
    pub pos: Vec2,
    /// Weave centerline; `pos.y` oscillates around this
    pub base_y: f32,
    pub patrol_bound_left: f32,
}

impl EnemyState {
    /// Spawn at the right edge with a random y from the level's safe band
    pub fn spawn(level: &Level, rng: &mut RngState) -> Self {
        let base_y = rng.next_range(level.enemy_band.0, level.enemy_band.1);
        Self {
            pos: Vec2::new(level.width, base_y),
            base_y,
            patrol_bound_left: level.patrol_bound_left,
        }
    }

    /// Advance one patrol tick. `elapsed_ms` is wall-clock time since the
    /// session started and drives the weave phase.
    pub fn advance(&mut self, level: &Level, elapsed_ms: f64, rng: &mut RngState) {
        self.pos.x -= ENEMY_SPEED;
        self.pos.y =
            self.base_y + (elapsed_ms as f32 * ENEMY_WEAVE_FREQ).sin() * ENEMY_WEAVE_AMPLITUDE;

        if self.pos.x < self.patrol_bound_left {
            self.base_y = rng.next_range(level.enemy_band.0, level.enemy_band.1);
            self.pos = Vec2::new(level.width, self.base_y);
            log::debug!("enemy wrapped to right edge, y={:.1}", self.base_y);
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, ENEMY_SIZE)
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    /// Top-left corner of the coin's bounding box
    pub pos: Vec2,
    /// Once set, the coin leaves the active set for good
    pub collected: bool,
}

impl Coin {
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, COIN_SIZE)
    }
}

/// What a transient notification announces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NotificationKind {
    CoinCollected { points: u32 },
    Damage,
}

/// Timestamped transient message, expired by the tick function - never by a
/// detached timer racing the main loop
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub expires_at_ms: f64,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub rng: RngState,
    pub level: Level,
    pub player: PlayerState,
    pub enemy: EnemyState,
    pub coins: Vec<Coin>,
    pub lives: u32,
    pub score: u32,
    /// Whole seconds since start; frozen at the Won/Lost transition
    pub elapsed_seconds: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub started_at_ms: f64,
    /// Last applied damage instant; None = never damaged
    pub last_damage_ms: Option<f64>,
    pub notification: Option<Notification>,
}

impl GameState {
    /// Construct a fresh, not-yet-started session.
    ///
    /// Viewport validation happens here - the tick function itself is total
    /// and never fails.
    pub fn new(seed: u64, cfg: &ViewportConfig) -> Result<Self, LevelError> {
        let level = Level::from_viewport(cfg)?;
        Ok(Self::from_level(seed, level))
    }

    fn from_level(seed: u64, level: Level) -> Self {
        let mut rng = RngState::new(seed);
        let player = PlayerState::at_spawn(&level);
        let enemy = EnemyState::spawn(&level, &mut rng);
        Self {
            seed,
            rng,
            level,
            player,
            enemy,
            coins: Vec::new(),
            lives: STARTING_LIVES,
            score: 0,
            elapsed_seconds: 0,
            phase: GamePhase::NotStarted,
            time_ticks: 0,
            started_at_ms: 0.0,
            last_damage_ms: None,
            notification: None,
        }
    }

    /// Explicit start action: NotStarted -> Playing
    ///
    /// Stamps the start instant, primes the coin field, resets counters.
    pub fn start(&mut self, now_ms: f64) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.started_at_ms = now_ms;
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.elapsed_seconds = 0;
        self.coins = self.level.prime_coins(&mut self.rng);
        self.phase = GamePhase::Playing;
        log::info!(
            "session started: {} lives, {} coins",
            self.lives,
            self.coins.len()
        );
    }

    /// Reset action: Won | Lost -> Playing
    ///
    /// Reconstructs the session wholesale - fresh player, enemy, and
    /// regenerated coin field; no partial mutation reuse. The seed is bumped
    /// so the replay draws a fresh RNG stream while staying reproducible.
    pub fn reset(&mut self, now_ms: f64) {
        if !matches!(self.phase, GamePhase::Won | GamePhase::Lost) {
            return;
        }
        let mut fresh = Self::from_level(self.seed.wrapping_add(1), self.level.clone());
        fresh.start(now_ms);
        log::info!("session reset");
        *self = fresh;
    }

    /// Coins still in play
    pub fn active_coins(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter().filter(|c| !c.collected)
    }

    /// Drop the transient notification once its instant has passed
    pub fn expire_notification(&mut self, now_ms: f64) {
        if let Some(n) = self.notification
            && now_ms >= n.expires_at_ms
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ViewportConfig {
        ViewportConfig {
            width: 1280.0,
            height: 720.0,
        }
    }

    #[test]
    fn test_start_primes_session() {
        let mut state = GameState::new(1, &cfg()).unwrap();
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.coins.is_empty());

        state.start(5000.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.started_at_ms, 5000.0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.coins.len(), state.level.platforms.len());

        // Start is one-shot
        state.score = 123;
        state.start(9000.0);
        assert_eq!(state.score, 123);
        assert_eq!(state.started_at_ms, 5000.0);
    }

    #[test]
    fn test_invulnerability_is_derived_from_now() {
        let mut player = PlayerState::at_spawn(&Level::from_viewport(&cfg()).unwrap());
        assert!(!player.is_invulnerable(0.0));
        player.invulnerable_until = 2000.0;
        assert!(player.is_invulnerable(1999.0));
        assert!(!player.is_invulnerable(2000.0));
    }

    #[test]
    fn test_notification_expiry() {
        let mut state = GameState::new(1, &cfg()).unwrap();
        state.notification = Some(Notification {
            kind: NotificationKind::Damage,
            expires_at_ms: 1000.0,
        });
        state.expire_notification(999.0);
        assert!(state.notification.is_some());
        state.expire_notification(1000.0);
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_enemy_wraps_with_band_respawn() {
        let level = Level::from_viewport(&cfg()).unwrap();
        let mut rng = RngState::new(3);
        let mut enemy = EnemyState::spawn(&level, &mut rng);
        enemy.pos.x = level.patrol_bound_left + ENEMY_SPEED * 0.5;

        enemy.advance(&level, 0.0, &mut rng);
        assert_eq!(enemy.pos.x, level.width);
        assert!(enemy.base_y >= level.enemy_band.0);
        assert!(enemy.base_y < level.enemy_band.1);
    }

    #[test]
    fn test_enemy_weave_is_bounded() {
        let level = Level::from_viewport(&cfg()).unwrap();
        let mut rng = RngState::new(3);
        let mut enemy = EnemyState::spawn(&level, &mut rng);
        let base = enemy.base_y;
        for tick in 0..200 {
            enemy.advance(&level, tick as f64 * 16.0, &mut rng);
            assert!((enemy.pos.y - base).abs() <= ENEMY_WEAVE_AMPLITUDE + 1e-4);
        }
    }

    #[test]
    fn test_rng_state_reproducible() {
        let mut a = RngState::new(99);
        let mut b = RngState::new(99);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
        // Stream advances
        let first = RngState::new(99).next_unit();
        assert_ne!(first, a.next_unit());
    }
}
