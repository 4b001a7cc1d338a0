//! Per-frame simulation tick
//!
//! Order within a tick is fixed: intents, integration, star motion,
//! collection, spawning, then quit.

use super::random::RandomSource;
use super::star::Star;
use super::state::{GameEvent, GamePhase, GameState};
use crate::audio::SoundPlayer;
use crate::consts::*;

/// Intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// One-shot quit request
    pub quit: bool,
}

/// Roll the spawn gate. Draws every frame so the random stream does not
/// depend on how many stars are alive.
pub fn spawn_gate(rng: &mut impl RandomSource) -> bool {
    rng.next_below(100) < SPAWN_CHANCE_PERCENT
}

/// Advance the game state by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
    sfx: &mut impl SoundPlayer,
) {
    if state.phase == GamePhase::Closed {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;
    state.elapsed_ms += state.frame_ms;

    // Both turns may be held; they simply add up
    if input.turn_left {
        state.ship.turn_left();
    }
    if input.turn_right {
        state.ship.turn_right();
    }
    if input.thrust {
        state.ship.accelerate();
    }
    state.ship.integrate(&state.arena);

    // Falling stars move, and drop out once past the bottom edge
    let arena = state.arena;
    let events = &mut state.events;
    state.stars.retain_mut(|star| {
        star.update();
        if star.is_below(&arena) {
            events.push(GameEvent::StarLost { id: star.id });
            false
        } else {
            true
        }
    });

    let mut gained = 0u64;
    let caught = state
        .ship
        .collect(&mut state.stars, sfx, |reward| gained += reward as u64);
    state.score += gained;
    for star in caught {
        log::debug!("Collected star {} at ({:.1}, {:.1})", star.id, star.pos.x, star.pos.y);
        state.events.push(GameEvent::StarCollected {
            id: star.id,
            pos: star.pos,
            reward: STAR_REWARD,
        });
    }

    if spawn_gate(rng) && state.has_star_capacity() {
        let id = state.next_entity_id();
        let star = Star::spawn(id, state.variant, &state.arena, rng);
        log::debug!("Spawned star {} ({} live)", id, state.stars.len() + 1);
        state.events.push(GameEvent::StarSpawned { id, pos: star.pos });
        state.stars.push(star);
    }

    if input.quit {
        state.phase = GamePhase::Closed;
        state.events.push(GameEvent::Closed { score: state.score });
        log::info!("Session closed after {} ticks, score {}", state.time_ticks, state.score);
    }
}
