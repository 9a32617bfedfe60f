//! Per-tick simulation update
//!
//! Advances one fixed 60 Hz step of an active session: shooter movement,
//! projectile climb, balloon fall, miss handling, and collision/scoring.
//! The engine reports what happened in a `TickResult`; sounds and
//! persistence are the caller's business.

use crate::consts::*;
use crate::sim::entity::{Balloon, Projectile};
use crate::sim::session::Session;

/// Directional input held for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// What one tick did to the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Balloons that crossed the bottom boundary this tick
    pub balloons_missed: u32,
    /// Balloons popped by projectiles this tick
    pub balloons_popped: u32,
    pub score_delta: u64,
    pub lives_delta: i32,
    /// Set the instant lives fall below zero after a miss
    pub should_end_game: bool,
}

/// Generous hit test: coarse rect overlap, then an enlarged circular bound
/// around the balloon center against the projectile center.
///
/// The circle is inflated by the projectile width only (not its height); a
/// deliberately forgiving approximation, not exact circle/rect intersection.
fn projectile_hits(balloon: &Balloon, projectile: &Projectile) -> bool {
    let r = balloon.radius;
    let p = projectile.pos;
    let rects_overlap = balloon.pos.x - r < p.x + BULLET_WIDTH
        && balloon.pos.x + r > p.x
        && balloon.pos.y - r < p.y + BULLET_HEIGHT
        && balloon.pos.y + r > p.y;
    if !rects_overlap {
        return false;
    }
    let d = balloon.pos - projectile.center();
    d.length_squared() < (r + BULLET_WIDTH) * (r + BULLET_WIDTH)
}

/// Advance the session by one fixed tick
pub fn tick(session: &mut Session, input: &TickInput) -> TickResult {
    let mut result = TickResult::default();

    // 1. Shooter movement, clamped to the play area
    let mut dx = 0.0;
    if input.move_left {
        dx -= session.shooter_speed;
    }
    if input.move_right {
        dx += session.shooter_speed;
    }
    session.shooter_x = (session.shooter_x + dx).clamp(0.0, PLAY_WIDTH - SHOOTER_WIDTH);

    // 2. Projectiles climb; drop any past the top boundary
    for projectile in &mut session.projectiles {
        projectile.pos.y -= BULLET_SPEED;
    }
    session.projectiles.retain(|p| p.pos.y >= 0.0);

    // 3/4. Balloons fall; resolve misses and pops in live-list order.
    // Removed entities are excluded from every later test this tick.
    let mut idx = 0;
    while idx < session.balloons.len() {
        session.balloons[idx].pos.y += session.balloons[idx].fall_speed;
        let balloon = &session.balloons[idx];

        if balloon.pos.y > PLAY_HEIGHT + balloon.radius {
            // Miss. The terminal check is strictly below zero: a 5-life
            // session survives five misses and ends on the sixth.
            session.lives -= 1;
            result.lives_delta -= 1;
            result.balloons_missed += 1;
            session.balloons.remove(idx);
            if session.lives < 0 {
                result.should_end_game = true;
            }
            continue;
        }

        let hit = session
            .projectiles
            .iter()
            .position(|p| projectile_hits(balloon, p));
        if let Some(pi) = hit {
            let gained =
                (balloon.base_score as f32 * session.difficulty.score_multiplier).floor() as u64;
            session.score += gained;
            result.score_delta += gained;
            result.balloons_popped += 1;
            session.projectiles.remove(pi);
            session.balloons.remove(idx);
            continue;
        }

        idx += 1;
    }

    result
}
