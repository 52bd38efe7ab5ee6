//! Projectile spawning, movement and pruning
//!
//! A [`Launcher`] owns one firer's live projectiles together with its fire
//! cooldown. The cooldown is a deadline compared against the simulation
//! clock, so there is no timer to schedule or cancel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Faction, Projectile, Rect};
use crate::tuning::ProjectileTuning;

/// Fire-rate gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Seconds that must pass between successful shots
    pub duration: f64,
    /// Clock time of the last successful shot
    pub last_fire: Option<f64>,
}

impl Cooldown {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            last_fire: None,
        }
    }

    /// True once `duration` has elapsed since the last shot (inclusive)
    pub fn ready(&self, now: f64) -> bool {
        match self.last_fire {
            Some(last) => now - last >= self.duration,
            None => true,
        }
    }

    /// Start a new cooldown window at `now`
    pub fn restart(&mut self, now: f64) {
        self.last_fire = Some(now);
    }
}

/// A firer's live projectile set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launcher {
    pub projectiles: Vec<Projectile>,
    pub cooldown: Cooldown,
}

impl Launcher {
    pub fn new(cooldown: f64) -> Self {
        Self {
            projectiles: Vec::new(),
            cooldown: Cooldown::new(cooldown),
        }
    }

    /// Spawn a projectile from the firing edge of `origin`
    ///
    /// Player shots leave the top edge, enemy shots the bottom edge, both
    /// horizontally centered. Returns false (and spawns nothing) while the
    /// cooldown is running.
    pub fn fire(
        &mut self,
        origin: Rect,
        faction: Faction,
        now: f64,
        tuning: &ProjectileTuning,
    ) -> bool {
        if !self.cooldown.ready(now) {
            return false;
        }

        let x = origin.center_x() - tuning.width / 2.0;
        let y = match faction {
            Faction::Player => origin.top(),
            Faction::Enemy => origin.bottom(),
        };
        self.projectiles.push(Projectile {
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
            faction,
        });
        self.cooldown.restart(now);
        true
    }

    /// Move every projectile one tick and drop the ones outside `[0, height]`
    ///
    /// Returns how many were pruned.
    pub fn advance(&mut self, playfield_height: f32) -> usize {
        let before = self.projectiles.len();
        for projectile in &mut self.projectiles {
            projectile.pos.y += projectile.velocity_y();
        }
        self.projectiles.retain(|p| (0.0..=playfield_height).contains(&p.pos.y));
        before - self.projectiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship_rect() -> Rect {
        Rect::new(Vec2::new(100.0, 570.0), Vec2::new(50.0, 30.0))
    }

    #[test]
    fn test_fire_spawns_centered_at_top_edge() {
        let mut launcher = Launcher::new(0.25);
        let tuning = ProjectileTuning::default();
        assert!(launcher.fire(ship_rect(), Faction::Player, 0.0, &tuning));
        let p = launcher.projectiles[0];
        assert_eq!(p.pos, Vec2::new(123.5, 570.0));
        assert_eq!(p.size, Vec2::new(3.0, 15.0));
    }

    #[test]
    fn test_enemy_fire_leaves_bottom_edge() {
        let mut launcher = Launcher::new(0.25);
        launcher.fire(ship_rect(), Faction::Enemy, 0.0, &ProjectileTuning::default());
        assert_eq!(launcher.projectiles[0].pos.y, 600.0);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let tuning = ProjectileTuning::default();
        let mut launcher = Launcher::new(0.25);
        assert!(launcher.fire(ship_rect(), Faction::Player, 1.0, &tuning));
        assert!(!launcher.fire(ship_rect(), Faction::Player, 1.125, &tuning));
        assert_eq!(launcher.projectiles.len(), 1);
        assert!(launcher.fire(ship_rect(), Faction::Player, 1.25, &tuning));
        assert_eq!(launcher.projectiles.len(), 2);
        // Window restarted at 1.25
        assert!(!launcher.fire(ship_rect(), Faction::Player, 1.375, &tuning));
    }

    #[test]
    fn test_advance_moves_by_faction() {
        let tuning = ProjectileTuning::default();
        let mut launcher = Launcher::new(0.0);
        launcher.fire(ship_rect(), Faction::Player, 0.0, &tuning);
        let above = Rect::new(Vec2::new(0.0, 100.0), Vec2::splat(10.0));
        launcher.fire(above, Faction::Enemy, 0.0, &tuning);
        launcher.advance(600.0);
        assert_eq!(launcher.projectiles[0].pos.y, 560.0);
        assert_eq!(launcher.projectiles[1].pos.y, 120.0);
    }

    #[test]
    fn test_advance_prunes_out_of_bounds() {
        let tuning = ProjectileTuning::default();
        let mut launcher = Launcher::new(0.0);
        let near_top = Rect::new(Vec2::new(0.0, 5.0), Vec2::splat(10.0));
        let near_bottom = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 595.0));
        launcher.fire(near_top, Faction::Player, 0.0, &tuning);
        launcher.fire(near_bottom, Faction::Enemy, 0.0, &tuning);
        launcher.fire(ship_rect(), Faction::Player, 0.0, &tuning);
        let pruned = launcher.advance(600.0);
        assert_eq!(pruned, 2);
        assert_eq!(launcher.projectiles.len(), 1);
        assert_eq!(launcher.projectiles[0].pos.y, 560.0);
    }
}
