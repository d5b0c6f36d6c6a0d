//! Flat level interchange representation
//!
//! The persisted level format is two ordered record lists; this module maps
//! them to and from live [`World`] geometry. Ordering is preserved exactly,
//! since insertion order drives editor picking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Platform, Spike, World};

/// A platform as persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A spike as persisted (anchor point and side length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpikeRecord {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// An ordered snapshot of level geometry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub platforms: Vec<PlatformRecord>,
    pub spikes: Vec<SpikeRecord>,
}

impl LevelData {
    /// Snapshot the world's current geometry
    pub fn capture(world: &World) -> Self {
        Self {
            platforms: world
                .platforms
                .iter()
                .map(|p| PlatformRecord {
                    x: p.position.x,
                    y: p.position.y,
                    w: p.size.x,
                    h: p.size.y,
                })
                .collect(),
            spikes: world
                .spikes
                .iter()
                .map(|s| SpikeRecord { x: s.position.x, y: s.position.y, size: s.size })
                .collect(),
        }
    }

    /// Replace the world's geometry with this level's
    pub fn apply(&self, world: &mut World) {
        world.platforms = self
            .platforms
            .iter()
            .map(|r| Platform::new(Vec2::new(r.x, r.y), Vec2::new(r.w, r.h)))
            .collect();
        world.spikes = self
            .spikes
            .iter()
            .map(|r| Spike::new(Vec2::new(r.x, r.y), r.size))
            .collect();
    }

    /// The built-in starting layout
    pub fn default_level() -> Self {
        Self {
            platforms: vec![
                PlatformRecord { x: 300.0, y: 500.0, w: 400.0, h: 400.0 },
                PlatformRecord { x: 800.0, y: 400.0, w: 200.0, h: 400.0 },
                PlatformRecord { x: 100.0, y: 300.0, w: 250.0, h: 400.0 },
            ],
            spikes: Vec::new(),
        }
    }
}
