//! Read-only view of a tick's result for renderers and HUDs

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Rect};
use super::state::{GamePhase, GameState};

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub playfield: Vec2,
    pub ship: Rect,
    pub projectiles: Vec<Rect>,
    /// Live enemies only
    pub enemies: Vec<Rect>,
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    pub game_over: bool,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self {
            playfield: Vec2::new(state.tuning.playfield.width, state.tuning.playfield.height),
            ship: state.ship.bounds(),
            projectiles: state.projectiles().iter().map(Bounds::bounds).collect(),
            enemies: state.live_enemies().map(Bounds::bounds).collect(),
            score: state.score,
            lives: state.lives,
            wave: state.wave_index + 1,
            game_over: state.phase == GamePhase::GameOver,
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lists_only_live_enemies() {
        let mut state = GameState::default();
        state.formation.enemies[0].alive = false;
        state.formation.enemies[49].alive = false;
        let snap = state.snapshot();
        assert_eq!(snap.enemies.len(), 48);
        assert_eq!(snap.enemies[0].pos, state.formation.enemies[1].pos);
        assert_eq!(snap.ship.pos, Vec2::new(375.0, 570.0));
        assert_eq!(snap.wave, 1);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_snapshot_json_has_hud_fields() {
        let snap = GameState::default().snapshot();
        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["score"], 0);
        assert_eq!(value["lives"], 3);
        assert_eq!(value["game_over"], false);
    }
}
