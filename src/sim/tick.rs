//! Per-frame simulation tick
//!
//! Fixed update order: input, fire, projectiles, formation, collisions.

use super::collision::{frontline_breached, resolve_projectile_hits};
use super::entity::{Bounds, Faction};
use super::formation::FormationStep;
use super::state::{GameEvent, GamePhase, GameState};

/// Logical controls held during a tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Restart the match (works in any phase)
    pub reset: bool,
}

/// Advance the game state by one frame
///
/// `dt` is the elapsed time in seconds since the previous tick; it only
/// drives the clock the fire cooldown is measured against. Movement is a
/// fixed step per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.reset {
        state.reset();
        return;
    }

    // Don't tick after game over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    state.clock += f64::from(dt.max(0.0));

    // Ship movement
    let mut dx = 0.0;
    if input.move_left {
        dx -= state.ship.speed;
    }
    if input.move_right {
        dx += state.ship.speed;
    }
    state.ship.shift(dx, state.tuning.playfield.width);

    // Fire
    if input.fire {
        let origin = state.ship.bounds();
        if state
            .ship
            .launcher
            .fire(origin, Faction::Player, state.clock, &state.tuning.projectile)
        {
            state.events.push(GameEvent::ProjectileFired);
        }
    }

    // Projectiles
    state.ship.launcher.advance(state.tuning.playfield.height);

    // Formation
    match state
        .formation
        .advance(&state.tuning.formation, state.tuning.playfield.width)
    {
        FormationStep::Regenerated => {
            state.wave_index += 1;
            log::info!(
                "Wave {} cleared, next wave speed {}",
                state.wave_index,
                state.formation.speed
            );
            state.events.push(GameEvent::WaveCleared {
                wave: state.wave_index,
                speed: state.formation.speed,
            });
        }
        FormationStep::Lateral { reversed: true } => {
            log::debug!("Formation reversed, direction {}", state.formation.direction);
            state.events.push(GameEvent::FormationReversed {
                direction: state.formation.direction,
            });
        }
        FormationStep::Lateral { reversed: false } | FormationStep::SteppedDown => {}
    }

    // Projectile vs enemy
    let kills = resolve_projectile_hits(
        &mut state.ship.launcher.projectiles,
        &mut state.formation.enemies,
    );
    for index in kills {
        state.score += state.tuning.rules.kill_score;
        log::debug!("Enemy {} destroyed, score {}", index, state.score);
        state.events.push(GameEvent::EnemyDestroyed {
            index,
            score: state.score,
        });
    }

    // Enemy vs frontline
    if let Some(index) = frontline_breached(&state.formation.enemies, state.frontline()) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: enemy {} reached the frontline (score {}, wave {})",
            index,
            state.score,
            state.wave_index + 1
        );
        state.events.push(GameEvent::GameOver { index });
    }
}
