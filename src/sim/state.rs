//! Game state and core simulation types
//!
//! All state that must be persisted for replay/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::field::ObstacleField;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing, collisions live
    Alive,
    /// Run ended; world frozen until a restart
    Dead,
}

/// One obstacle slot: a pipe pair with a vertical gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal center reference line; decreases each tick while active
    pub x: f32,
    /// Top edge of the passable gap
    pub gap_top: i32,
    /// Whether this slot currently holds a collidable obstacle
    pub active: bool,
    /// Set exactly once, when the trailing edge passes the player
    pub scored: bool,
}

impl Obstacle {
    /// An empty slot
    pub const INACTIVE: Obstacle = Obstacle {
        x: 0.0,
        gap_top: 0,
        active: false,
        scored: false,
    };

    /// Leading (left) edge
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - PIPE_WIDTH / 2.0
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + PIPE_WIDTH / 2.0
    }

    /// Bottom edge of the passable gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        (self.gap_top + GAP_HEIGHT) as f32
    }

    /// Solid span above the gap
    pub fn top_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.left(), 0.0),
            Vec2::new(self.right(), self.gap_top as f32),
        )
    }

    /// Solid span below the gap
    pub fn bottom_box(&self) -> Aabb {
        Aabb::new(
            Vec2::new(self.left(), self.gap_bottom()),
            Vec2::new(self.right(), SCREEN_H),
        )
    }
}

/// Fixed-length history of recent player positions, newest first.
/// Purely cosmetic - the renderer draws it as a fading wake.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    /// Record the current position (call each tick)
    pub fn record(&mut self, pos: Vec2) {
        self.points.insert(0, pos);
        if self.points.len() > TRAIL_LEN {
            self.points.pop();
        }
    }

    /// Stored positions, newest first
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving gap placement
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Points scored this run
    pub score: u32,
    /// Player vertical position; X is fixed at [`PLAYER_X`]
    pub player_y: f32,
    /// Smoothed vertical velocity
    pub velocity_y: f32,
    /// Current leftward scroll speed
    pub pipe_speed: f32,
    /// Seconds of play this run
    pub elapsed: f32,
    /// Simulation tick counter (frozen while dead)
    pub time_ticks: u64,
    /// The scrolling obstacle field
    pub field: ObstacleField,
    /// Balance values
    pub tuning: Tuning,
    /// Cosmetic wake behind the player (not gameplay-affecting)
    #[serde(skip)]
    pub trail: Trail,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with explicit balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = ObstacleField::new();
        field.initialize(&mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Alive,
            score: 0,
            player_y: SCREEN_H / 2.0,
            velocity_y: 0.0,
            pipe_speed: tuning.base_pipe_speed,
            elapsed: 0.0,
            time_ticks: 0,
            field,
            tuning,
            trail: Trail::default(),
        }
    }

    /// Begin a fresh run after death.
    ///
    /// The RNG stream continues where it left off, so each run gets a new
    /// layout while `new(seed)` still replays a whole session verbatim.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Alive;
        self.score = 0;
        self.player_y = SCREEN_H / 2.0;
        self.velocity_y = 0.0;
        self.pipe_speed = self.tuning.base_pipe_speed;
        self.elapsed = 0.0;
        self.field.initialize(&mut self.rng);
        log::info!("run restarted");
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.phase == GamePhase::Alive
    }

    /// Player center in world space
    pub fn player_pos(&self) -> Vec2 {
        Vec2::new(PLAYER_X, self.player_y)
    }

    /// Sprite tilt for rendering, in degrees; thrust tips the nose up
    pub fn tilt_degrees(&self) -> f32 {
        (-self.velocity_y * TILT_FACTOR).clamp(-TILT_MAX_DEG, TILT_MAX_DEG)
    }

    /// Active obstacles for drawing
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.field.obstacles()
    }
}
