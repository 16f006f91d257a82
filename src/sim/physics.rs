//! Candidate integration under gravity and input
//!
//! Produces a proposed next player state without committing it; collision
//! resolution decides whether the move stands. The rule order below is
//! load-bearing: gravity is added to velocity *after* the position update,
//! so it shapes the next tick's integration, which is what gives the jump
//! arc its profile.

use super::level::Level;
use super::state::PlayerState;
use super::tick::TickInput;
use crate::consts::*;

/// Integrate one tick and return the candidate state.
///
/// Pure: no collision knowledge, no side effects.
pub fn integrate(player: &PlayerState, input: &TickInput, level: &Level) -> PlayerState {
    let mut next = *player;

    // Horizontal velocity comes straight from input, never accumulated
    next.vel.x = if input.move_left {
        -MOVE_SPEED
    } else if input.move_right {
        MOVE_SPEED
    } else {
        0.0
    };
    next.is_moving = next.vel.x != 0.0;

    // Jump is edge-triggered upstream; the grounded check lives here
    if input.jump_pressed && !next.is_jumping {
        next.vel.y = JUMP_IMPULSE;
        next.is_jumping = true;
    }

    next.pos += next.vel;

    // Gravity affects the *next* tick's integration
    next.vel.y += GRAVITY;

    // Ground clamp
    if next.pos.y > level.floor_y {
        next.pos.y = level.floor_y;
        next.vel.y = 0.0;
        next.is_jumping = false;
    }

    // Horizontal clamp to the level span
    next.pos.x = next.pos.x.clamp(0.0, level.right_boundary());

    next
}
