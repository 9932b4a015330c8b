//! Data-driven game balance
//!
//! Everything that changes how the game feels, separated from the structural
//! constants in [`crate::consts`]. Defaults are the shipped values; a JSON
//! blob can override any subset for playtesting.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Upward target velocity while thrust is held
    pub thrust_rate: f32,
    /// Downward target velocity while thrust is released
    pub gravity_rate: f32,
    /// First-order smoothing factor pulling velocity toward its target
    pub velocity_smoothing: f32,
    /// Scroll speed at the start of a run
    pub base_pipe_speed: f32,
    /// Seconds of flat difficulty before the ramp starts
    pub speed_ramp_delay: f32,
    /// Speed gained per second of elapsed play time once ramping
    pub speed_ramp_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            thrust_rate: THRUST_RATE,
            gravity_rate: GRAVITY_RATE,
            velocity_smoothing: VELOCITY_SMOOTHING,
            base_pipe_speed: BASE_PIPE_SPEED,
            speed_ramp_delay: SPEED_RAMP_DELAY,
            speed_ramp_rate: SPEED_RAMP_RATE,
        }
    }
}

impl Tuning {
    /// Parse a tuning override; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
