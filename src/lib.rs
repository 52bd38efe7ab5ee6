//! Invader Sweep - a single-screen arcade shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, projectiles, formation, collisions)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input sampling and HUD text are left to the host; the host calls
//! [`sim::tick`] once per frame and draws [`sim::Snapshot`].

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, autopilot, tick};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Nominal frame time (60 Hz display refresh)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 30.0;
    /// Pixels per tick
    pub const SHIP_SPEED: f32 = 5.0;
    /// Distance from the bottom of the playfield to the ship's top edge
    pub const SHIP_BOTTOM_OFFSET: f32 = 30.0;
    /// Seconds between successful shots
    pub const FIRE_COOLDOWN: f64 = 0.25;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 3.0;
    pub const PROJECTILE_HEIGHT: f32 = 15.0;
    /// Pixels per tick
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Formation grid
    pub const ENEMY_ROWS: usize = 5;
    pub const ENEMY_COLS: usize = 10;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const ENEMY_PADDING: f32 = 10.0;
    /// Extra gap above the first row
    pub const FORMATION_TOP: f32 = 50.0;
    /// Vertical drop on a wall contact (one enemy height)
    pub const STEP_DOWN: f32 = ENEMY_HEIGHT;
    pub const BASE_SPEED: f32 = 1.0;
    /// Added to the speed multiplier every cleared wave
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Upper bound on `rows * cols` accepted from a tuning document
    pub const MAX_ENEMIES: usize = 10_000;

    /// Match rules
    pub const STARTING_LIVES: u8 = 3;
    pub const KILL_SCORE: u64 = 10;
}
