//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ship::Ship;
use super::star::{Star, StarVariant};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Quit was requested; no further ticks run
    Closed,
}

/// Playable window area (pixels). The ship wraps around its edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies in [0, width) x [0, height)
    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    StarSpawned { id: u32, pos: Vec2 },
    StarCollected { id: u32, pos: Vec2, reward: u32 },
    /// A falling star left through the bottom edge
    StarLost { id: u32 },
    Closed { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    /// Which star variant spawns
    pub variant: StarVariant,
    /// Milliseconds of game time each tick represents
    pub frame_ms: u64,
    /// Score (only ever increases during a session)
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Game time elapsed, drives star animation
    pub elapsed_ms: u64,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Active stars, in spawn order
    pub stars: Vec<Star>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Start a session with the ship parked at the arena center
    pub fn new(arena: Arena, variant: StarVariant, frame_ms: u64) -> Self {
        let mut ship = Ship::new();
        ship.warp(arena.center());

        Self {
            arena,
            variant,
            frame_ms,
            score: 0,
            time_ticks: 0,
            elapsed_ms: 0,
            phase: GamePhase::Running,
            ship,
            stars: Vec::with_capacity(MAX_STARS),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Room for another star under the cap
    pub fn has_star_capacity(&self) -> bool {
        self.stars.len() < MAX_STARS
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default(), StarVariant::default(), FRAME_INTERVAL_MS)
    }
}
