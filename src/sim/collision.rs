//! Collision detection between boxes
//!
//! Enemies are always visited in row-major index order so that the same
//! inputs resolve to the same kills.

use super::entity::{Bounds, Enemy, Faction, Projectile};

/// Strict AABB overlap between two entities
#[inline]
pub fn aabb_overlap(a: &impl Bounds, b: &impl Bounds) -> bool {
    a.bounds().overlaps(&b.bounds())
}

/// Remove player projectiles that hit a live enemy and kill that enemy
///
/// Each projectile kills at most one enemy (the first live one it overlaps)
/// and is consumed on the spot. Returns the indices of killed enemies in the
/// order they died.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut [Enemy],
) -> Vec<usize> {
    let mut kills = Vec::new();

    projectiles.retain(|projectile| {
        if projectile.faction != Faction::Player {
            return true;
        }
        let hit = enemies
            .iter_mut()
            .enumerate()
            .find(|(_, enemy)| enemy.alive && aabb_overlap(projectile, &**enemy));
        match hit {
            Some((index, enemy)) => {
                enemy.alive = false;
                kills.push(index);
                false
            }
            None => true,
        }
    });

    kills
}

/// First live enemy whose bottom edge has reached `frontline_y`
pub fn frontline_breached(enemies: &[Enemy], frontline_y: f32) -> Option<usize> {
    enemies
        .iter()
        .position(|enemy| enemy.alive && enemy.bounds().bottom() >= frontline_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy {
            pos: Vec2::new(x, y),
            size: Vec2::new(40.0, 30.0),
            alive: true,
        }
    }

    fn shot(x: f32, y: f32) -> Projectile {
        Projectile {
            pos: Vec2::new(x, y),
            size: Vec2::new(3.0, 15.0),
            speed: 10.0,
            faction: Faction::Player,
        }
    }

    #[test]
    fn test_hit_kills_enemy_and_consumes_projectile() {
        let mut enemies = vec![enemy(100.0, 100.0), enemy(200.0, 100.0)];
        let mut projectiles = vec![shot(210.0, 120.0), shot(500.0, 120.0)];
        let kills = resolve_projectile_hits(&mut projectiles, &mut enemies);
        assert_eq!(kills, vec![1]);
        assert!(enemies[0].alive);
        assert!(!enemies[1].alive);
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].pos.x, 500.0);
    }

    #[test]
    fn test_projectile_kills_at_most_one() {
        // Two stacked enemies both overlap the shot
        let mut enemies = vec![enemy(100.0, 100.0), enemy(100.0, 120.0)];
        let mut projectiles = vec![shot(110.0, 125.0)];
        let kills = resolve_projectile_hits(&mut projectiles, &mut enemies);
        assert_eq!(kills, vec![0]);
        assert!(enemies[1].alive);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_second_projectile_skips_dead_enemy() {
        let mut enemies = vec![enemy(100.0, 100.0), enemy(100.0, 120.0)];
        let mut projectiles = vec![shot(110.0, 125.0), shot(112.0, 125.0)];
        let kills = resolve_projectile_hits(&mut projectiles, &mut enemies);
        assert_eq!(kills, vec![0, 1]);
        assert!(projectiles.is_empty());
    }

    #[test]
    fn test_touching_edges_do_not_hit() {
        let mut enemies = vec![enemy(100.0, 100.0)];
        // Shot's top edge sits exactly on the enemy's bottom edge
        let mut projectiles = vec![shot(110.0, 130.0)];
        assert!(resolve_projectile_hits(&mut projectiles, &mut enemies).is_empty());
        assert_eq!(projectiles.len(), 1);
    }

    #[test]
    fn test_enemy_projectiles_pass_through_enemies() {
        let mut enemies = vec![enemy(100.0, 100.0)];
        let mut projectiles = vec![Projectile {
            faction: Faction::Enemy,
            ..shot(110.0, 110.0)
        }];
        assert!(resolve_projectile_hits(&mut projectiles, &mut enemies).is_empty());
        assert!(enemies[0].alive);
    }

    #[test]
    fn test_frontline_inclusive() {
        let mut enemies = vec![enemy(0.0, 500.0), enemy(50.0, 540.0)];
        assert_eq!(frontline_breached(&enemies, 571.0), None);
        assert_eq!(frontline_breached(&enemies, 570.0), Some(1));
        enemies[1].alive = false;
        assert_eq!(frontline_breached(&enemies, 570.0), None);
    }
}
