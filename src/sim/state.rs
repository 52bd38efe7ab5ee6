//! Game state and match bookkeeping
//!
//! One [`GameState`] owns everything a match mutates. There is no ambient
//! state, so independent simulations can run side by side.

use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Projectile, Ship};
use super::formation::Formation;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Playing,
    /// Frontline breached; ticks are no-ops until reset
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ship spawned a projectile
    ProjectileFired,
    /// Enemy at `index` (row-major) was destroyed
    EnemyDestroyed { index: usize, score: u64 },
    /// Formation touched a wall and will step down next tick
    FormationReversed { direction: f32 },
    /// All enemies dead; a faster wave was spawned
    WaveCleared { wave: u32, speed: f32 },
    /// Enemy at `index` reached the frontline
    GameOver { index: usize },
    /// Match restored to its starting state
    Reset,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance sheet this match was built from
    pub tuning: Tuning,
    /// Player ship and its projectiles
    pub ship: Ship,
    /// Enemy grid
    pub formation: Formation,
    /// Score (+kill_score per enemy)
    pub score: u64,
    /// Player lives (displayed, never decremented)
    pub lives: u8,
    /// Current phase
    pub phase: GamePhase,
    /// Waves cleared so far (0-based index of the current wave)
    pub wave_index: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulated elapsed time in seconds
    pub clock: f64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a match at its starting layout
    pub fn new(tuning: Tuning) -> Self {
        let ship = Ship::spawn(&tuning);
        let formation = Formation::new(&tuning.formation);
        Self {
            lives: tuning.rules.starting_lives,
            tuning,
            ship,
            formation,
            score: 0,
            phase: GamePhase::Playing,
            wave_index: 0,
            time_ticks: 0,
            clock: 0.0,
            events: Vec::new(),
        }
    }

    /// Restore score, lives, ship, projectiles and grid to the start of a match
    ///
    /// The clock keeps running so cooldown arithmetic stays monotonic.
    pub fn reset(&mut self) {
        self.ship = Ship::spawn(&self.tuning);
        self.formation = Formation::new(&self.tuning.formation);
        self.score = 0;
        self.lives = self.tuning.rules.starting_lives;
        self.wave_index = 0;
        self.phase = GamePhase::Playing;
        self.events.clear();
        self.events.push(GameEvent::Reset);
        log::info!("Match reset");
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Player's live projectiles
    pub fn projectiles(&self) -> &[Projectile] {
        &self.ship.launcher.projectiles
    }

    /// Live enemies in row-major order
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.formation.live()
    }

    /// Frontline y (the ship's top edge)
    pub fn frontline(&self) -> f32 {
        self.ship.pos.y
    }
}
