//! Per-tick simulation step
//!
//! One call advances the whole world by one tick as a single atomic step:
//! candidate integration, one resolve/commit pass, then the lifecycle
//! transition checks. Nothing mutates session state from anywhere else, so
//! the presentation layer always observes a fully consistent snapshot
//! between ticks.

use super::collision::{HazardKind, Resolution, resolve};
use super::physics::integrate;
use super::state::{GamePhase, GameState, Notification, NotificationKind, PlayerState};
use crate::consts::*;

/// Abstract directional input for a single tick
///
/// Level-triggered booleans derived upstream from raw key events;
/// `jump_pressed` is edge-triggered (true only on the press tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_pressed: bool,
}

/// Advance the session by one tick.
///
/// `now_ms` is the caller's wall-clock in milliseconds; all timed state
/// (invulnerability, notifications, the elapsed counter) is evaluated
/// against it here. Outside `Playing` this is a no-op - the scheduler is
/// expected to stop driving ticks in terminal states.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let elapsed_ms = now_ms - state.started_at_ms;
    state.elapsed_seconds = (elapsed_ms / 1000.0).floor().max(0.0) as u32;
    state.expire_notification(now_ms);

    // The enemy patrols independently; it cannot be blocked
    state
        .enemy
        .advance(&state.level, elapsed_ms, &mut state.rng);

    let candidate = integrate(&state.player, input, &state.level);

    match resolve(candidate, &state.level, &state.enemy, &state.coins) {
        Resolution::Hazard(kind) => {
            // Position not updated this tick; no progress score either
            apply_damage(state, kind, now_ms);
        }
        Resolution::Committed { player, coins_hit } => {
            state.player = player;

            for id in coins_hit {
                let coin = state
                    .coins
                    .iter_mut()
                    .find(|c| c.id == id && !c.collected);
                if let Some(coin) = coin {
                    coin.collected = true;
                    state.score += COIN_SCORE;
                    state.notification = Some(Notification {
                        kind: NotificationKind::CoinCollected { points: COIN_SCORE },
                        expires_at_ms: now_ms + NOTIFICATION_MS,
                    });
                    log::debug!("coin {id} collected, score={}", state.score);
                }
            }

            // Distance-traveled bonus for a clean tick
            state.score += PROGRESS_SCORE;

            if state.player.pos.x >= state.level.right_boundary() {
                state.phase = GamePhase::Won;
                log::info!(
                    "level complete: score={}, time={}s",
                    state.score,
                    state.elapsed_seconds
                );
            }
        }
    }

    state.time_ticks += 1;
}

/// Apply one damage event, guarded by the immunity window.
///
/// A hazard inside the window is a strict no-op - the guard is the
/// timestamp comparison, not a flag that something else has to clear.
pub fn apply_damage(state: &mut GameState, kind: HazardKind, now_ms: f64) {
    let window_open = state
        .last_damage_ms
        .is_none_or(|t| now_ms - t > INVULNERABILITY_MS);
    if !window_open {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    state.score = state.score.saturating_sub(DAMAGE_PENALTY);

    state.player = PlayerState::at_spawn(&state.level);
    state.player.invulnerable_until = now_ms + INVULNERABILITY_MS;
    state.last_damage_ms = Some(now_ms);
    state.notification = Some(Notification {
        kind: NotificationKind::Damage,
        expires_at_ms: now_ms + NOTIFICATION_MS,
    });

    log::debug!("hit {kind:?}: lives={}, score={}", state.lives, state.score);

    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        log::info!("out of lives at {}s", state.elapsed_seconds);
    }
}
