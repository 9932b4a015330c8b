//! Wave Rush - a side-scrolling obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player motion, obstacle field, collisions)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input polling, and platform bring-up live outside this crate;
//! the embedding loop feeds [`sim::tick`] a [`sim::TickInput`] once per fixed
//! timestep and draws from the read accessors on [`sim::GameState`].

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// World dimensions
    pub const SCREEN_W: f32 = 400.0;
    pub const SCREEN_H: f32 = 240.0;

    /// Player defaults - X never changes, the world scrolls past it
    pub const PLAYER_X: f32 = 80.0;
    pub const PLAYER_W: f32 = 16.0;
    pub const PLAYER_H: f32 = 16.0;
    /// Vertical clamp inset from the screen edges
    pub const EDGE_MARGIN: f32 = 8.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 48.0;
    pub const GAP_HEIGHT: i32 = 80;
    pub const PIPE_SPACING: f32 = 160.0;
    /// Fixed obstacle slot count; slots are recycled, never reallocated
    pub const MAX_PIPES: usize = 8;
    /// First obstacle spawns this far past the right edge
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Gap top edge is drawn uniformly from [GAP_MIN_TOP, GAP_MIN_TOP + GAP_TOP_RANGE),
    /// keeping the gap at least 32 units off both screen edges
    pub const GAP_MIN_TOP: i32 = 32;
    pub const GAP_TOP_RANGE: i32 = SCREEN_H as i32 - 64 - GAP_HEIGHT;

    /// Scroll speed at the start of a run
    pub const BASE_PIPE_SPEED: f32 = 2.0;
    /// Seconds of flat difficulty before the ramp starts
    pub const SPEED_RAMP_DELAY: f32 = 5.0;
    /// Speed gained per second of elapsed play time once ramping
    pub const SPEED_RAMP_RATE: f32 = 0.02;

    /// Vertical control targets (symmetric "wave" feel)
    pub const THRUST_RATE: f32 = 2.4;
    pub const GRAVITY_RATE: f32 = 2.4;
    /// First-order smoothing factor applied to velocity each tick
    pub const VELOCITY_SMOOTHING: f32 = 0.25;

    /// Sprite tilt derivation for rendering
    pub const TILT_FACTOR: f32 = 6.0;
    pub const TILT_MAX_DEG: f32 = 40.0;

    /// Cosmetic trail buffer length
    pub const TRAIL_LEN: usize = 10;
}

/// First-order exponential smoothing of `current` toward `target`
#[inline]
pub fn approach(current: f32, target: f32, smoothing: f32) -> f32 {
    current + (target - current) * smoothing
}
