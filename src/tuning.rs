//! Data-driven game feel constants
//!
//! Every feel-affecting number lives here with its canonical default and can
//! be overridden from a JSON file. A missing or unreadable file falls back
//! to the defaults.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Named physics, editor and camera constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Walking and falling ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Upward velocity applied by a jump (px/s)
    pub jump_impulse: f32,
    /// Per-tick multiplicative decay of horizontal velocity
    pub friction: f32,
    /// Horizontal velocity-to-position scale (px/s per velocity unit)
    pub move_speed: f32,

    // === Rope swing ===
    /// Per-tick multiplicative decay of angular velocity (air/rope drag)
    pub swing_damping: f32,
    /// Angular velocity kept after bouncing off a platform mid-swing
    pub swing_restitution: f32,
    /// Below this |angular velocity| a platform hit cancels the swing (rad/s)
    pub swing_stall_threshold: f32,
    /// Angular acceleration from holding a direction mid-swing (rad/s²)
    pub swing_torque: f32,
    /// Divisor on the horizontal component of the release velocity. A feel
    /// constant with no physical story; it sets how far a released swing
    /// carries. Attach scales by the same factor so an immediate release
    /// round-trips the tangential velocity.
    pub release_x_divisor: f32,

    // === Editor ===
    /// Distance from a platform edge that starts a resize grab (px)
    pub edge_tolerance: f32,
    /// Smallest platform width/height a resize can produce (px)
    pub min_platform_size: f32,
    /// Snap distance for dropping a spike onto a platform top (px)
    pub snap_threshold: f32,
    /// Size of a freshly created platform (px)
    pub default_platform_size: Vec2,
    /// Side length of a freshly created spike (px)
    pub default_spike_size: f32,

    // === Camera ===
    /// Per-tick lerp factor toward the player (lower = floatier)
    pub camera_lerp: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1300.0,
            jump_impulse: 600.0,
            friction: 0.9,
            move_speed: 100.0,

            swing_damping: 0.995,
            swing_restitution: 0.95,
            swing_stall_threshold: 0.1,
            swing_torque: 2.0,
            release_x_divisor: 100.0,

            edge_tolerance: 10.0,
            min_platform_size: 30.0,
            snap_threshold: 20.0,
            default_platform_size: Vec2::new(200.0, 100.0),
            default_spike_size: 50.0,

            camera_lerp: 0.1,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Bad tuning file {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save tuning to a JSON file (best effort)
    pub fn save(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Could not encode tuning: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(path, json) {
            log::warn!("Could not save tuning to {}: {err}", path.display());
        } else {
            log::info!("Tuning saved to {}", path.display());
        }
    }
}
