//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed frame interval
//! - Injected random source only
//! - Stable iteration order (stars kept in spawn order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod random;
pub mod ship;
pub mod star;
pub mod state;
pub mod tick;

pub use animation::frame_index;
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use ship::Ship;
pub use star::{Star, StarKind, StarVariant, Tint};
pub use state::{Arena, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, spawn_gate, tick};
