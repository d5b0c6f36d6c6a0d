//! Game state and core simulation types
//!
//! Everything a level or session snapshot needs lives here: world geometry,
//! the player body with its two kinematic regimes, and the per-tick event
//! list the presentation layer consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::editor::EditorState;
use super::level::LevelData;
use super::rect::Rect;
use crate::consts::*;

/// Whether the sim is running physics or the level editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Play,
    Edit,
}

/// A static platform the player can stand on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub position: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Collision and pick rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }
}

/// A lethal spike, anchored at a point on the ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    /// Ground-anchor point; the triangle rises above it
    pub position: Vec2,
    pub size: f32,
}

impl Spike {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self { position, size }
    }

    /// The square bounding the triangular silhouette, apex above the anchor
    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.position.x, self.position.y - self.size, self.size, self.size)
    }
}

/// Player kinematics - linear walk/fall or pendulum swing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Motion {
    /// Normal grounded/airborne kinematics
    Falling,
    /// Attached to a rope anchor, constrained to a circular arc
    Swinging {
        anchor: Vec2,
        length: f32,
        /// Rope angle from the anchor, radians; straight down is π/2
        angle: f32,
        angular_vel: f32,
    },
}

/// The player body
///
/// Exactly one exists per session. Velocity components only drive motion in
/// the `Falling` regime; while swinging the rope state is authoritative and
/// the linear velocity is recomputed at release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub x_velocity: f32,
    pub y_velocity: f32,
    /// Horizontal input direction, -1/0/1
    pub move_dir: i8,
    pub can_jump: bool,
    pub motion: Motion,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            x_velocity: 0.0,
            y_velocity: 0.0,
            move_dir: 0,
            can_jump: false,
            motion: Motion::Falling,
        }
    }

    /// Square hitbox centered on the position
    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, Vec2::splat(PLAYER_SIZE))
    }

    pub fn is_swinging(&self) -> bool {
        matches!(self.motion, Motion::Swinging { .. })
    }

    /// Rope endpoints for drawing (body end first), if attached
    pub fn rope_line(&self) -> Option<(Vec2, Vec2)> {
        match self.motion {
            Motion::Swinging { anchor, .. } => Some((self.position, anchor)),
            Motion::Falling => None,
        }
    }
}

/// Static level geometry
///
/// Both collections are ordered; insertion order is significant because
/// pointer picks iterate back-to-front, so later insertions occlude earlier
/// ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub platforms: Vec<Platform>,
    pub spikes: Vec<Spike>,
}

impl World {
    /// Topmost platform containing the point (later insertions win)
    pub fn platform_at(&self, point: Vec2) -> Option<usize> {
        self.platforms.iter().rposition(|p| p.rect().contains_point(point))
    }

    /// Topmost spike whose hitbox contains the point
    pub fn spike_at(&self, point: Vec2) -> Option<usize> {
        self.spikes.iter().rposition(|s| s.hitbox().contains_point(point))
    }
}

/// Discrete happenings during a tick, for sound/effect triggering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Landed,
    GrappleAttached,
    GrappleReleased,
    HazardHit,
    Reset,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub mode: Mode,
    pub editor: EditorState,
    /// Respawn point for hazard hits and resets
    pub spawn: Vec2,
    /// Smoothed camera follow target
    pub camera_target: Vec2,
    /// Events from the most recent tick (transient, not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Start a session on the built-in level
    pub fn new() -> Self {
        Self::from_level(&LevelData::default_level())
    }

    /// Start a session on the given level
    pub fn from_level(level: &LevelData) -> Self {
        let mut world = World::default();
        level.apply(&mut world);
        let spawn = Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        Self {
            world,
            player: Player::new(spawn),
            mode: Mode::Play,
            editor: EditorState::default(),
            spawn,
            camera_target: spawn,
            events: Vec::new(),
            time_ticks: 0,
        }
    }

    /// Hard reset of the body to the spawn point
    ///
    /// No lives or score: hazard contact and the reset intent both land here.
    pub fn respawn(&mut self) {
        self.player.position = self.spawn;
        self.player.x_velocity = 0.0;
        self.player.y_velocity = 0.0;
        self.player.motion = Motion::Falling;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
