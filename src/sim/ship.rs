//! The player's ship
//!
//! Inertial movement: turning and thrust only touch angle and velocity, and
//! `integrate` is the single place the ship actually moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::star::Star;
use super::state::Arena;
use crate::audio::{SoundEffect, SoundPlayer};
use crate::consts::*;
use crate::{normalize_degrees, offset_x, offset_y, wrap_coordinate};

/// The player ship
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees, kept in [0, 360). 0 is up, clockwise positive.
    pub angle: f32,
}

impl Ship {
    pub fn new() -> Self {
        Self::default()
    }

    /// Teleport without touching velocity or facing
    pub fn warp(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn turn_left(&mut self) {
        self.angle = normalize_degrees(self.angle - TURN_STEP_DEGREES);
    }

    pub fn turn_right(&mut self) {
        self.angle = normalize_degrees(self.angle + TURN_STEP_DEGREES);
    }

    /// Add a fixed thrust along the current facing
    pub fn accelerate(&mut self) {
        self.vel.x += offset_x(self.angle, THRUST);
        self.vel.y += offset_y(self.angle, THRUST);
    }

    /// Move by velocity, wrap into the arena, then damp velocity.
    ///
    /// Call exactly once per frame, after that frame's turn/thrust intents.
    pub fn integrate(&mut self, arena: &Arena) {
        self.pos += self.vel;
        self.pos.x = wrap_coordinate(self.pos.x, arena.width);
        self.pos.y = wrap_coordinate(self.pos.y, arena.height);

        self.vel *= DAMPING;
    }

    /// Whether a star sits inside the capture radius
    pub fn can_reach(&self, star: &Star) -> bool {
        self.pos.distance(star.pos) < CAPTURE_RADIUS
    }

    /// Collect every star within reach.
    ///
    /// Survivors are rebuilt in one partition pass and swapped in, so nothing
    /// is skipped or visited twice. Each catch credits `on_gain` with
    /// STAR_REWARD and plays the collect sound once. Returns the stars caught,
    /// in their original order.
    pub fn collect(
        &self,
        stars: &mut Vec<Star>,
        sfx: &mut impl SoundPlayer,
        mut on_gain: impl FnMut(u32),
    ) -> Vec<Star> {
        let (caught, kept): (Vec<Star>, Vec<Star>) =
            std::mem::take(stars).into_iter().partition(|star| self.can_reach(star));
        *stars = kept;

        for _ in &caught {
            on_gain(STAR_REWARD);
            sfx.play(SoundEffect::StarCollected);
        }
        caught
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::AudioManager;
    use crate::sim::star::{StarKind, Tint};

    fn arena() -> Arena {
        Arena::new(WINDOW_WIDTH, WINDOW_HEIGHT)
    }

    fn star_at(id: u32, x: f32, y: f32) -> Star {
        Star {
            id,
            pos: Vec2::new(x, y),
            kind: StarKind::Twinkling,
            tint: Tint::WHITE,
        }
    }

    #[test]
    fn test_turns_wrap_and_cancel() {
        let mut ship = Ship::new();
        ship.turn_left();
        assert_eq!(ship.angle, 355.5);
        ship.turn_right();
        assert_eq!(ship.angle, 0.0);

        for _ in 0..100 {
            ship.turn_right();
        }
        assert!((0.0..360.0).contains(&ship.angle));
        assert!((ship.angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_accelerate_facing_up() {
        let mut ship = Ship::new();
        ship.accelerate();
        assert!(ship.vel.x.abs() < 1e-6);
        assert!((ship.vel.y + THRUST).abs() < 1e-6);
    }

    #[test]
    fn test_accelerate_compounds() {
        let mut ship = Ship::new();
        ship.angle = 90.0;
        ship.accelerate();
        ship.accelerate();
        assert!((ship.vel.x - 1.0).abs() < 1e-6);
        assert!(ship.vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_integrate_moves_then_damps() {
        let mut ship = Ship::new();
        ship.warp(Vec2::new(100.0, 100.0));
        ship.vel = Vec2::new(2.0, -4.0);
        ship.integrate(&arena());
        assert_eq!(ship.pos, Vec2::new(102.0, 96.0));
        assert!((ship.vel.x - 1.9).abs() < 1e-6);
        assert!((ship.vel.y + 3.8).abs() < 1e-6);
    }

    #[test]
    fn test_integrate_wraps_before_damping() {
        let mut ship = Ship::new();
        ship.vel = Vec2::new(-1.0, -1.0);
        ship.integrate(&Arena::new(640.0, 480.0));
        assert_eq!(ship.pos, Vec2::new(639.0, 479.0));
        assert!((ship.vel.x + 0.95).abs() < 1e-6);
        assert!((ship.vel.y + 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_integrate_wraps_far_edge() {
        let mut ship = Ship::new();
        ship.warp(Vec2::new(639.5, 479.5));
        ship.vel = Vec2::new(1.0, 1.0);
        ship.integrate(&arena());
        assert_eq!(ship.pos, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_warp_keeps_motion() {
        let mut ship = Ship::new();
        ship.vel = Vec2::new(1.0, 2.0);
        ship.angle = 45.0;
        ship.warp(Vec2::new(320.0, 240.0));
        assert_eq!(ship.pos, Vec2::new(320.0, 240.0));
        assert_eq!(ship.vel, Vec2::new(1.0, 2.0));
        assert_eq!(ship.angle, 45.0);
    }

    #[test]
    fn test_collect_single_star() {
        let mut ship = Ship::new();
        ship.warp(Vec2::new(100.0, 100.0));
        let mut stars = vec![star_at(1, 110.0, 100.0)];
        let mut audio = AudioManager::new();
        let mut score = 0u64;

        let caught = ship.collect(&mut stars, &mut audio, |gain| score += gain as u64);

        assert_eq!(caught.len(), 1);
        assert!(stars.is_empty());
        assert_eq!(score, 10);
        assert_eq!(audio.play_count(), 1);
    }

    #[test]
    fn test_collect_radius_is_exclusive() {
        let mut ship = Ship::new();
        ship.warp(Vec2::new(100.0, 100.0));
        let mut stars = vec![star_at(1, 135.0, 100.0), star_at(2, 100.0, 134.9)];
        let mut audio = AudioManager::new();
        let mut score = 0u64;

        ship.collect(&mut stars, &mut audio, |gain| score += gain as u64);

        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].id, 1);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_collect_cluster_same_frame() {
        let mut ship = Ship::new();
        ship.warp(Vec2::new(200.0, 200.0));
        let mut stars = vec![
            star_at(1, 200.0, 200.0),
            star_at(2, 400.0, 400.0),
            star_at(3, 210.0, 190.0),
            star_at(4, 180.0, 215.0),
            star_at(5, 50.0, 50.0),
        ];
        let mut audio = AudioManager::new();
        let mut score = 0u64;

        let caught = ship.collect(&mut stars, &mut audio, |gain| score += gain as u64);

        assert_eq!(caught.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert_eq!(stars.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(score, 30);
        assert_eq!(audio.play_count(), 3);
    }

    #[test]
    fn test_collect_nothing() {
        let ship = Ship::new();
        let mut stars: Vec<Star> = Vec::new();
        let mut audio = AudioManager::new();
        let mut calls = 0;

        let caught = ship.collect(&mut stars, &mut audio, |_| calls += 1);

        assert!(caught.is_empty());
        assert_eq!(calls, 0);
        assert_eq!(audio.play_count(), 0);
    }
}
