//! Per-playthrough mutable state
//!
//! One `Session` value covers a single playthrough: score, lives, shooter,
//! and the live entity lists. It is owned by the state machine and handed to
//! the simulation engine each tick; there are no process-wide globals.

use rand::Rng;

use crate::consts::*;
use crate::difficulty::DifficultyPreset;
use crate::sim::entity::{Balloon, Projectile};

/// The mutable gameplay state for one playthrough.
///
/// Created fresh on entry to the playing screen and kept unchanged across
/// pause/resume.
#[derive(Debug, Clone)]
pub struct Session {
    pub score: u64,
    /// Starts at `INITIAL_LIVES`; may reach -1 before the terminal check
    pub lives: i32,
    /// Left edge of the shooter, clamped to the play area by the engine
    pub shooter_x: f32,
    /// Player-adjustable movement per tick, never below `MIN_SHOOTER_SPEED`
    pub shooter_speed: f32,
    pub difficulty: &'static DifficultyPreset,
    pub balloons: Vec<Balloon>,
    pub projectiles: Vec<Projectile>,
}

impl Session {
    /// Fresh session: zero score, full lives, shooter centered at its
    /// default speed, no live entities.
    pub fn new(difficulty: &'static DifficultyPreset) -> Self {
        Self {
            score: 0,
            lives: INITIAL_LIVES,
            shooter_x: PLAY_WIDTH / 2.0 - SHOOTER_WIDTH / 2.0,
            shooter_speed: INITIAL_SHOOTER_SPEED,
            difficulty,
            balloons: Vec::new(),
            projectiles: Vec::new(),
        }
    }

    /// Fire a projectile from the shooter's current position
    pub fn fire(&mut self) {
        self.projectiles.push(Projectile::fired_from(self.shooter_x));
    }

    /// Spawn one balloon per the active preset
    pub fn spawn_balloon<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.balloons.push(Balloon::spawn(rng, self.difficulty));
    }

    /// Step the shooter speed up or down, flooring at the minimum
    pub fn adjust_shooter_speed(&mut self, delta: f32) {
        self.shooter_speed = (self.shooter_speed + delta).max(MIN_SHOOTER_SPEED);
    }
}
