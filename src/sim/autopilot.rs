//! Idle/demo mode - a deterministic pilot that plays the game
//!
//! Each column's lowest live enemy is a candidate. The pilot picks the
//! candidate whose aim point (its center led by the formation's sweep during
//! the shot's flight) is nearest the ship, steers toward it and fires
//! whenever it is lined up.

use super::entity::{Bounds, Rect};
use super::state::GameState;
use super::tick::TickInput;

/// Build this tick's input from the current state
pub fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.is_game_over() {
        return input;
    }

    let cols = state.tuning.formation.cols.max(1);
    let mut lowest: Vec<Option<Rect>> = vec![None; cols];
    for (index, enemy) in state.formation.enemies.iter().enumerate() {
        if !enemy.alive {
            continue;
        }
        let rect = enemy.bounds();
        let slot = &mut lowest[index % cols];
        if slot.is_none_or(|best| rect.bottom() > best.bottom()) {
            *slot = Some(rect);
        }
    }

    let ship = state.ship.bounds();
    let aim_point = |target: &Rect| {
        let flight_ticks = ((ship.top() - target.bottom()) / state.tuning.projectile.speed)
            .max(0.0)
            .ceil();
        target.center_x() + state.formation.direction * state.formation.speed * flight_ticks
    };

    // Ties keep the leftmost column
    let mut best: Option<(Rect, f32)> = None;
    for target in lowest.into_iter().flatten() {
        let offset = aim_point(&target) - ship.center_x();
        if best.is_none_or(|(_, best_offset)| offset.abs() < best_offset.abs()) {
            best = Some((target, offset));
        }
    }

    let Some((target, offset)) = best else {
        return input;
    };

    let deadzone = state.ship.speed / 2.0;
    if offset < -deadzone {
        input.move_left = true;
    } else if offset > deadzone {
        input.move_right = true;
    }

    input.fire = offset.abs() < target.size.x / 2.0;
    input
}
