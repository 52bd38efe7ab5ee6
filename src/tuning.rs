//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from a [`Tuning`].
//! Defaults mirror [`crate::consts`]; a JSON document only needs to name the
//! values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Playfield bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Player ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    pub width: f32,
    pub height: f32,
    /// Lateral pixels per tick
    pub speed: f32,
    /// Top edge sits this far above the bottom of the playfield
    pub bottom_offset: f32,
    /// Seconds between successful shots
    pub fire_cooldown: f64,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            speed: SHIP_SPEED,
            bottom_offset: SHIP_BOTTOM_OFFSET,
            fire_cooldown: FIRE_COOLDOWN,
        }
    }
}

/// Projectiles (shared by both factions)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    /// Vertical pixels per tick (unsigned; faction picks the direction)
    pub speed: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: PROJECTILE_WIDTH,
            height: PROJECTILE_HEIGHT,
            speed: PROJECTILE_SPEED,
        }
    }
}

/// Enemy grid geometry and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationTuning {
    pub rows: usize,
    pub cols: usize,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub padding: f32,
    pub top: f32,
    pub step_down: f32,
    pub base_speed: f32,
    pub speed_increment: f32,
}

impl Default for FormationTuning {
    fn default() -> Self {
        Self {
            rows: ENEMY_ROWS,
            cols: ENEMY_COLS,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            padding: ENEMY_PADDING,
            top: FORMATION_TOP,
            step_down: STEP_DOWN,
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
        }
    }
}

impl FormationTuning {
    /// Horizontal extent of the freshly spawned grid, including the left margin
    pub fn grid_right_edge(&self) -> f32 {
        self.cols as f32 * (self.enemy_width + self.padding)
    }

    /// Bottom edge of the last row of a freshly spawned grid
    pub fn grid_bottom_edge(&self) -> f32 {
        self.top + self.rows as f32 * (self.enemy_height + self.padding)
    }
}

/// Scoring and lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTuning {
    pub starting_lives: u8,
    pub kill_score: u64,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            kill_score: KILL_SCORE,
        }
    }
}

/// Complete balance sheet for one simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: PlayfieldTuning,
    pub ship: ShipTuning,
    pub projectile: ProjectileTuning,
    pub formation: FormationTuning,
    #[serde(rename = "match")]
    pub rules: MatchTuning,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a JSON tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject geometry the simulation cannot lay out
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield.width", self.playfield.width),
            ("playfield.height", self.playfield.height),
            ("ship.width", self.ship.width),
            ("ship.height", self.ship.height),
            ("ship.speed", self.ship.speed),
            ("projectile.width", self.projectile.width),
            ("projectile.height", self.projectile.height),
            ("projectile.speed", self.projectile.speed),
            ("formation.enemy_width", self.formation.enemy_width),
            ("formation.enemy_height", self.formation.enemy_height),
            ("formation.step_down", self.formation.step_down),
            ("formation.base_speed", self.formation.base_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("ship.bottom_offset", f64::from(self.ship.bottom_offset)),
            ("ship.fire_cooldown", self.ship.fire_cooldown),
            ("formation.padding", f64::from(self.formation.padding)),
            ("formation.top", f64::from(self.formation.top)),
            ("formation.speed_increment", f64::from(self.formation.speed_increment)),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        let formation = &self.formation;
        if formation.rows == 0 || formation.cols == 0 {
            return Err(TuningError::Invalid("formation needs at least one row and column".into()));
        }
        match formation.rows.checked_mul(formation.cols) {
            Some(count) if count <= MAX_ENEMIES => {}
            _ => {
                return Err(TuningError::Invalid(format!(
                    "formation of {} x {} exceeds {MAX_ENEMIES} enemies",
                    formation.rows, formation.cols
                )));
            }
        }
        if formation.grid_right_edge() >= self.playfield.width {
            return Err(TuningError::Invalid(format!(
                "formation is {} wide but the playfield is only {}",
                formation.grid_right_edge(),
                self.playfield.width
            )));
        }
        if formation.grid_bottom_edge() >= self.ship_y() {
            return Err(TuningError::Invalid(format!(
                "formation reaches y = {} but the ship sits at {}",
                formation.grid_bottom_edge(),
                self.ship_y()
            )));
        }
        if self.ship.width > self.playfield.width
            || self.ship.bottom_offset > self.playfield.height
        {
            return Err(TuningError::Invalid("ship does not fit in the playfield".into()));
        }

        Ok(())
    }

    /// Ship's top edge (the frontline)
    pub fn ship_y(&self) -> f32 {
        self.playfield.height - self.ship.bottom_offset
    }
}
