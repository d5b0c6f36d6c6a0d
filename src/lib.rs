//! Hookle - a grappling-hook platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, rope swing, collisions, level editor)
//! - `persistence`: Versioned level save/load
//! - `tuning`: Data-driven physics and editor constants
//!
//! Rendering, audio, and input devices are external: callers feed
//! [`sim::TickInput`] intents into [`sim::tick`] and read the observable
//! state and [`sim::GameEvent`]s back out.

pub mod persistence;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions - the original single-screen layout, Y-down
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Player hitbox side length
    pub const PLAYER_SIZE: f32 = 50.0;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
