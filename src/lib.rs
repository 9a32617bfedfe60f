//! Balloon Shooter - a single-screen arcade game core
//!
//! Core modules:
//! - `sim`: Simulation engine (entities, per-tick physics, collision, scoring)
//! - `game`: Screen state machine, input routing, spawn scheduler
//! - `difficulty`: Fixed difficulty presets
//! - `highscore`: Persisted high-score store
//! - `snapshot`: Read-only frame snapshots for a presentation adapter
//! - `audio`: Abstract sound-notification boundary
//!
//! Rendering, font/text layout, audio playback, and the platform event pump
//! are external collaborators; the core only exposes snapshots and consumes
//! discrete input events.

pub mod audio;
pub mod difficulty;
pub mod game;
pub mod highscore;
pub mod sim;
pub mod snapshot;

pub use difficulty::{DifficultyPreset, UnknownDifficulty};
pub use game::{Game, InputEvent, Screen};
pub use highscore::HighScoreStore;
pub use sim::{Session, TickInput, TickResult, tick};
pub use snapshot::FrameSnapshot;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate
    pub const TICK_HZ: u32 = 60;
    /// Milliseconds per simulation tick
    pub const TICK_MS: u64 = 1000 / TICK_HZ as u64;

    /// Play area dimensions
    pub const PLAY_WIDTH: f32 = 600.0;
    pub const PLAY_HEIGHT: f32 = 800.0;

    /// Shooter geometry - sits near the bottom edge
    pub const SHOOTER_WIDTH: f32 = 50.0;
    pub const SHOOTER_HEIGHT: f32 = 20.0;
    /// Gap between the shooter and the bottom boundary
    pub const SHOOTER_BOTTOM_MARGIN: f32 = 10.0;
    /// Fixed vertical position of the shooter's top edge
    pub const SHOOTER_Y: f32 = PLAY_HEIGHT - SHOOTER_HEIGHT - SHOOTER_BOTTOM_MARGIN;

    /// Shooter movement per tick, player-adjustable at runtime
    pub const INITIAL_SHOOTER_SPEED: f32 = 7.0;
    /// Lower bound for the player-adjustable shooter speed
    pub const MIN_SHOOTER_SPEED: f32 = 1.0;

    /// Projectile geometry and climb rate (units/tick)
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Lives at the start of every session
    pub const INITIAL_LIVES: i32 = 5;
}
