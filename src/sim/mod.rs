//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Movement is a fixed step per tick
//! - Elapsed time only feeds the cooldown clock
//! - Stable iteration order (row-major enemy index)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod formation;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{aabb_overlap, frontline_breached, resolve_projectile_hits};
pub use entity::{Bounds, Enemy, Faction, Projectile, Rect, Ship};
pub use formation::{Formation, FormationStep, layout};
pub use projectile::{Cooldown, Launcher};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
