//! Deterministic simulation module
//!
//! All gameplay and editor logic lives here. This module must be pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies
//!
//! Known limitation: there is no continuous collision detection, so a large
//! `dt` can step the body through thin geometry. Drive the sim with the
//! fixed-timestep accumulator loop (`consts::SIM_DT`) rather than raw frame
//! deltas.

pub mod collision;
pub mod editor;
pub mod level;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{resolve_platform_collisions, resolve_spike_collisions};
pub use editor::{Drag, EditorState, ResizeMask, Selection, resize_mask};
pub use level::{LevelData, PlatformRecord, SpikeRecord};
pub use rect::{Mtv, Rect, minimum_translation};
pub use state::{GameEvent, GameState, Mode, Motion, Platform, Player, Spike, World};
pub use tick::{TickInput, tick};
