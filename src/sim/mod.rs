//! Simulation module
//!
//! All gameplay logic lives here: the entity model, the per-session mutable
//! state, and the per-tick update. This module is pure simulation:
//! - Fixed timestep only (speeds are units/tick)
//! - RNG passed in by the caller
//! - No rendering, audio, or file I/O

pub mod entity;
pub mod session;
pub mod tick;

pub use entity::{BALLOON_KINDS, Balloon, BalloonKind, PALETTE, Projectile, choose_kind, spawn_weight};
pub use session::Session;
pub use tick::{TickInput, TickResult, tick};
