//! The level-editor interaction state machine
//!
//! Pointer-driven pick/move/resize for platforms and drag/snap for spikes,
//! operating directly on [`World`] geometry while the sim is in edit mode.
//! Selection and the active drag are sum types, so "platform and spike both
//! selected" is unrepresentable.
//!
//! Resizes recompute every active edge from the snapshot taken at pointer
//! press, never from the live rectangle, so opposite-edge drags compose
//! without drift and a crossing pointer can only clamp, not invert.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Platform, Spike, World};
use crate::tuning::Tuning;

/// Which edges of a platform a resize drag is grabbing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizeMask {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl ResizeMask {
    /// True if any edge is active
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Mark every edge whose coordinate lies within `tolerance` of the point
///
/// Two adjacent edges active at once is a corner grab.
pub fn resize_mask(platform: &Platform, point: Vec2, tolerance: f32) -> ResizeMask {
    let rect = platform.rect();
    ResizeMask {
        left: (point.x - rect.left()).abs() <= tolerance,
        right: (point.x - rect.right()).abs() <= tolerance,
        top: (point.y - rect.top()).abs() <= tolerance,
        bottom: (point.y - rect.bottom()).abs() <= tolerance,
    }
}

/// The entity the editor currently has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    Platform(usize),
    Spike(usize),
}

/// The drag in progress, if any
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Drag {
    #[default]
    None,
    /// Platform follows the pointer at a fixed grab offset
    Move { grab: Vec2 },
    /// Active edges recompute from the pre-drag snapshot every update
    Resize { mask: ResizeMask, origin_pos: Vec2, origin_size: Vec2 },
    /// Spike follows the pointer; snaps to a platform top on release
    DragSpike { grab: Vec2 },
}

/// Editor interaction state
///
/// The drag resets on every pointer release; both fields reset on an
/// edit-mode toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorState {
    pub selection: Selection,
    pub drag: Drag,
}

impl EditorState {
    /// Handle a pointer press at a world-space point
    ///
    /// Spikes take priority over platforms. Pressing an already-selected
    /// entity deselects it, except a selected platform pressed near an edge,
    /// which starts a resize instead.
    pub fn pointer_press(&mut self, world: &mut World, pointer: Vec2, tuning: &Tuning) {
        if let Some(index) = world.spike_at(pointer) {
            if self.selection == Selection::Spike(index) {
                self.selection = Selection::None;
                self.drag = Drag::None;
            } else {
                self.selection = Selection::Spike(index);
                self.drag = Drag::DragSpike { grab: world.spikes[index].position - pointer };
            }
        } else if let Some(index) = world.platform_at(pointer) {
            let platform = world.platforms[index];
            let mask = resize_mask(&platform, pointer, tuning.edge_tolerance);
            if self.selection == Selection::Platform(index) && mask.any() {
                self.drag = Drag::Resize {
                    mask,
                    origin_pos: platform.position,
                    origin_size: platform.size,
                };
            } else if self.selection == Selection::Platform(index) {
                self.selection = Selection::None;
                self.drag = Drag::None;
            } else {
                self.selection = Selection::Platform(index);
                self.drag = Drag::Move { grab: pointer - platform.position };
            }
        } else {
            self.selection = Selection::None;
            self.drag = Drag::None;
        }
    }

    /// Apply the active drag for a held pointer
    pub fn pointer_drag(&mut self, world: &mut World, pointer: Vec2, tuning: &Tuning) {
        match self.drag {
            Drag::Move { grab } => {
                if let Selection::Platform(index) = self.selection
                    && let Some(platform) = world.platforms.get_mut(index)
                {
                    platform.position = pointer - grab;
                }
            }
            Drag::Resize { mask, origin_pos, origin_size } => {
                if let Selection::Platform(index) = self.selection
                    && let Some(platform) = world.platforms.get_mut(index)
                {
                    apply_resize(platform, mask, origin_pos, origin_size, pointer, tuning);
                }
            }
            Drag::DragSpike { grab } => {
                if let Selection::Spike(index) = self.selection
                    && let Some(spike) = world.spikes.get_mut(index)
                {
                    spike.position = pointer + grab;
                }
            }
            Drag::None => {}
        }
    }

    /// End the active drag; a dropped spike may snap to a platform top
    pub fn pointer_release(&mut self, world: &mut World, tuning: &Tuning) {
        if let (Drag::DragSpike { .. }, Selection::Spike(index)) = (&self.drag, self.selection) {
            snap_spike_to_platform(world, index, tuning);
        }
        self.drag = Drag::None;
    }

    /// Insert a platform of the default size centered on a point, selected
    pub fn create_platform(&mut self, world: &mut World, at: Vec2, tuning: &Tuning) {
        let size = tuning.default_platform_size;
        world.platforms.push(Platform::new(at - size / 2.0, size));
        self.selection = Selection::Platform(world.platforms.len() - 1);
        self.drag = Drag::None;
    }

    /// Insert a spike of the default size with its hitbox centered on a
    /// point, selected
    pub fn create_spike(&mut self, world: &mut World, at: Vec2, tuning: &Tuning) {
        let size = tuning.default_spike_size;
        let anchor = Vec2::new(at.x - size / 2.0, at.y + size / 2.0);
        world.spikes.push(Spike::new(anchor, size));
        self.selection = Selection::Spike(world.spikes.len() - 1);
        self.drag = Drag::None;
    }

    /// Remove whichever entity is selected; a no-op without a selection
    pub fn delete_selected(&mut self, world: &mut World) {
        match self.selection {
            Selection::Platform(index) if index < world.platforms.len() => {
                world.platforms.remove(index);
            }
            Selection::Spike(index) if index < world.spikes.len() => {
                world.spikes.remove(index);
            }
            _ => {}
        }
        self.selection = Selection::None;
        self.drag = Drag::None;
    }

    /// Drop all interaction state (edit-mode toggle)
    pub fn clear(&mut self) {
        self.selection = Selection::None;
        self.drag = Drag::None;
    }
}

/// Recompute a platform from its pre-drag snapshot for each active edge
///
/// Every edge is clamped to the minimum size with the opposite edge held
/// fixed, so a crossing pointer never produces inverted geometry.
fn apply_resize(
    platform: &mut Platform,
    mask: ResizeMask,
    origin_pos: Vec2,
    origin_size: Vec2,
    pointer: Vec2,
    tuning: &Tuning,
) {
    let min = tuning.min_platform_size;
    let mut pos = origin_pos;
    let mut size = origin_size;

    if mask.left {
        let right = origin_pos.x + origin_size.x;
        size.x = (right - pointer.x).max(min);
        pos.x = right - size.x;
    }
    if mask.right {
        size.x = (pointer.x - origin_pos.x).max(min);
    }
    if mask.top {
        let bottom = origin_pos.y + origin_size.y;
        size.y = (bottom - pointer.y).max(min);
        pos.y = bottom - size.y;
    }
    if mask.bottom {
        size.y = (pointer.y - origin_pos.y).max(min);
    }

    platform.position = pos;
    platform.size = size;
}

/// Snap a dropped spike onto the first platform whose top edge is nearby
///
/// The spike's X is then clamped so its footprint stays on the platform;
/// a platform narrower than the spike keeps the left edges aligned.
fn snap_spike_to_platform(world: &mut World, index: usize, tuning: &Tuning) {
    let Some(spike) = world.spikes.get(index).copied() else {
        return;
    };
    let threshold = tuning.snap_threshold;
    let center = spike.position.x + spike.size / 2.0;
    for platform in &world.platforms {
        let rect = platform.rect();
        let in_span = center >= rect.left() - threshold && center <= rect.right() + threshold;
        let near_top = (spike.position.y - rect.top()).abs() <= threshold;
        if in_span && near_top {
            let mut snapped = spike;
            snapped.position.y = rect.top();
            snapped.position.x =
                snapped.position.x.min(rect.right() - spike.size).max(rect.left());
            world.spikes[index] = snapped;
            return;
        }
    }
}
