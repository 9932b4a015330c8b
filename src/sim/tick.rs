//! Fixed timestep simulation tick
//!
//! The two-state machine (Alive/Dead) that advances one run deterministically.

use super::collision::player_hits_field;
use super::state::{GamePhase, GameState};
use crate::approach;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Thrust held this tick (any "accelerate" control)
    pub pressing: bool,
    /// Restart request (one-shot; only meaningful while dead)
    pub restart: bool,
    /// Let the built-in pilot derive `pressing` instead (demo mode)
    pub autopilot: bool,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle's trailing edge passed the player
    Scored,
    /// Collision ended the run
    Died,
    /// A dead run was reset
    Restarted,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Dead => {
            if input.restart {
                state.restart();
                events.push(GameEvent::Restarted);
            }
            // The wake still follows the (frozen) player on the death screen
            state.trail.record(state.player_pos());
            return events;
        }
        GamePhase::Alive => {}
    }

    state.time_ticks += 1;

    let pressing = if input.autopilot {
        autopilot_pressing(state)
    } else {
        input.pressing
    };

    // Velocity eases toward the target instead of snapping; this smoothing
    // is what gives the wave its glide
    let target = if pressing {
        -state.tuning.thrust_rate
    } else {
        state.tuning.gravity_rate
    };
    state.velocity_y = approach(state.velocity_y, target, state.tuning.velocity_smoothing);
    state.player_y += state.velocity_y;

    // Clamp to the screen, killing velocity so it can't wind up against the edge
    if state.player_y < EDGE_MARGIN {
        state.player_y = EDGE_MARGIN;
        state.velocity_y = 0.0;
    }
    if state.player_y > SCREEN_H - EDGE_MARGIN {
        state.player_y = SCREEN_H - EDGE_MARGIN;
        state.velocity_y = 0.0;
    }

    // World scrolls left; each trailing-edge crossing is one point
    let crossings = state.field.advance(state.pipe_speed, PLAYER_X, &mut state.rng);
    for _ in 0..crossings {
        state.score += 1;
        events.push(GameEvent::Scored);
    }

    // Difficulty recomputes from absolute elapsed time after the grace period
    state.elapsed += dt;
    if state.elapsed > state.tuning.speed_ramp_delay {
        state.pipe_speed =
            state.tuning.base_pipe_speed + state.elapsed * state.tuning.speed_ramp_rate;
    }

    // Same-tick collision, against this tick's post-move positions
    if player_hits_field(state.player_y, &state.field) {
        state.phase = GamePhase::Dead;
        log::info!("run over at score {}", state.score);
        events.push(GameEvent::Died);
    }

    state.trail.record(state.player_pos());
    events
}

/// Steer toward the gap center of the nearest obstacle still ahead.
///
/// Substitutes only the thrust bit; everything else goes through the normal
/// tick path. A tick-hashed dither keeps demo runs from looking mechanical.
fn autopilot_pressing(state: &GameState) -> bool {
    let target_y = state
        .field
        .obstacles()
        .filter(|ob| ob.right() >= PLAYER_X)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|ob| ob.gap_top as f32 + GAP_HEIGHT as f32 / 2.0)
        .unwrap_or(SCREEN_H / 2.0);

    let hash = (state.time_ticks as u32).wrapping_mul(2654435761);
    let dither = ((hash >> 16) % 7) as f32 - 3.0;

    state.player_y > target_y + dither
}
