//! Entity shapes: ship, projectile, enemy
//!
//! Plain value holders. Every entity is an axis-aligned box with its origin at
//! the top-left corner; y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::projectile::Launcher;
use crate::tuning::Tuning;

/// Axis-aligned bounding box (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Strict overlap on all four half-planes; touching edges do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Anything that can take part in a bounding-box test
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    /// Travels up (decreasing y)
    Player,
    /// Travels down (increasing y)
    Enemy,
}

impl Faction {
    /// Sign applied to a projectile's speed
    pub fn direction(self) -> f32 {
        match self {
            Faction::Player => -1.0,
            Faction::Enemy => 1.0,
        }
    }
}

/// A projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Unsigned pixels per tick
    pub speed: f32,
    pub faction: Faction,
}

impl Projectile {
    /// Signed vertical displacement per tick
    pub fn velocity_y(&self) -> f32 {
        self.speed * self.faction.direction()
    }
}

impl Bounds for Projectile {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// One cell of the formation grid
///
/// Dead enemies stay in the grid so indices remain stable for the wave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
}

impl Bounds for Enemy {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
    /// Lateral pixels per tick
    pub speed: f32,
    /// Live projectiles and fire cooldown
    pub launcher: Launcher,
}

impl Ship {
    /// Ship at its start position: horizontally centered, resting on the bottom
    pub fn spawn(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.ship.width, tuning.ship.height);
        let x = (tuning.playfield.width - size.x) / 2.0;
        Self {
            pos: Vec2::new(x, tuning.ship_y()),
            size,
            speed: tuning.ship.speed,
            launcher: Launcher::new(tuning.ship.fire_cooldown),
        }
    }

    /// Shift laterally by `dx`, clamped so the hull stays inside `[0, width]`
    pub fn shift(&mut self, dx: f32, playfield_width: f32) {
        let max_x = (playfield_width - self.size.x).max(0.0);
        self.pos.x = (self.pos.x + dx).clamp(0.0, max_x);
    }
}

impl Bounds for Ship {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap_strict() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let touching = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let inside = Rect::new(Vec2::new(9.0, 9.0), Vec2::new(3.0, 3.0));
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn test_faction_direction() {
        let up = Projectile {
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            speed: 10.0,
            faction: Faction::Player,
        };
        let down = Projectile {
            faction: Faction::Enemy,
            ..up
        };
        assert_eq!(up.velocity_y(), -10.0);
        assert_eq!(down.velocity_y(), 10.0);
    }

    #[test]
    fn test_ship_spawn_centered() {
        let tuning = Tuning::default();
        let ship = Ship::spawn(&tuning);
        assert_eq!(ship.pos, Vec2::new(375.0, 570.0));
        assert!(ship.launcher.projectiles.is_empty());
    }

    #[test]
    fn test_ship_shift_clamps() {
        let tuning = Tuning::default();
        let mut ship = Ship::spawn(&tuning);
        ship.pos.x = 3.0;
        ship.shift(-5.0, tuning.playfield.width);
        assert_eq!(ship.pos.x, 0.0);

        ship.pos.x = 748.0;
        ship.shift(5.0, tuning.playfield.width);
        assert_eq!(ship.pos.x, 750.0);
    }
}
