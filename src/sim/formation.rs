//! Enemy formation controller
//!
//! The whole grid moves as one rigid body. Each tick is either a lateral
//! sweep or a one-tick step down, never both:
//!
//! ```text
//! Lateral --(wall touched)--> flip direction, arm step-down
//! StepDown --(always)-------> Lateral
//! ```
//!
//! Clearing the grid starts a new wave at the initial layout with a faster
//! sweep. There is no victory state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Enemy;
use crate::consts::MAX_ENEMIES;
use crate::tuning::FormationTuning;

/// What a formation tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationStep {
    /// Moved sideways; `reversed` when a live enemy touched a wall
    Lateral { reversed: bool },
    /// Dropped one row height
    SteppedDown,
    /// Grid was empty and has been respawned for the next wave
    Regenerated,
}

/// Enemy grid plus its shared movement state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    /// Row-major, `rows * cols` entries for the whole wave
    pub enemies: Vec<Enemy>,
    /// +1 sweeping right, -1 sweeping left
    pub direction: f32,
    /// Next tick is a step down
    pub stepping_down: bool,
    /// Lateral pixels per tick; only grows within a match
    pub speed: f32,
}

impl Formation {
    /// Fresh grid at baseline speed
    pub fn new(tuning: &FormationTuning) -> Self {
        Self {
            enemies: layout(tuning),
            direction: 1.0,
            stepping_down: false,
            speed: tuning.base_speed,
        }
    }

    /// Live enemies in row-major order
    pub fn live(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }

    pub fn is_cleared(&self) -> bool {
        !self.enemies.iter().any(|e| e.alive)
    }

    /// Advance one state-machine step
    pub fn advance(&mut self, tuning: &FormationTuning, playfield_width: f32) -> FormationStep {
        if self.is_cleared() {
            self.next_wave(tuning);
            return FormationStep::Regenerated;
        }

        if self.stepping_down {
            for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
                enemy.pos.y += tuning.step_down;
            }
            self.stepping_down = false;
            return FormationStep::SteppedDown;
        }

        let dx = self.direction * self.speed;
        let mut touched_wall = false;
        for enemy in self.enemies.iter_mut().filter(|e| e.alive) {
            enemy.pos.x += dx;
            if enemy.pos.x <= 0.0 || enemy.pos.x + enemy.size.x >= playfield_width {
                touched_wall = true;
            }
        }

        if touched_wall {
            self.direction = -self.direction;
            self.stepping_down = true;
        }
        FormationStep::Lateral {
            reversed: touched_wall,
        }
    }

    /// Respawn the grid one speed increment faster
    fn next_wave(&mut self, tuning: &FormationTuning) {
        self.speed += tuning.speed_increment;
        self.enemies = layout(tuning);
        self.direction = 1.0;
        self.stepping_down = false;
    }
}

/// Initial grid: `padding` margin on the left, `top + padding` above row 0
pub fn layout(tuning: &FormationTuning) -> Vec<Enemy> {
    let size = Vec2::new(tuning.enemy_width, tuning.enemy_height);
    let mut enemies = Vec::with_capacity(tuning.rows.saturating_mul(tuning.cols).min(MAX_ENEMIES));
    for row in 0..tuning.rows {
        for col in 0..tuning.cols {
            enemies.push(Enemy {
                pos: Vec2::new(
                    col as f32 * (size.x + tuning.padding) + tuning.padding,
                    row as f32 * (size.y + tuning.padding) + tuning.padding + tuning.top,
                ),
                size,
                alive: true,
            });
        }
    }
    enemies
}
