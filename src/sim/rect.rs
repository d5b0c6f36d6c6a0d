//! Axis-aligned rectangle geometry
//!
//! All world geometry is axis-aligned boxes in a Y-down coordinate system
//! (origin top-left, gravity is +Y). Collision response works on the
//! minimum translation vector: the smallest single-axis push that separates
//! an overlapping pair.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            x: center.x - size.x / 2.0,
            y: center.y - size.y / 2.0,
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check if a point lies inside the rect (edges inclusive)
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Strict AABB overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The minimum translation vector for an overlapping rect pair
///
/// Carries the resolution axis and the signed penetration along it;
/// subtracting the value from the moving rect's coordinate on that axis
/// separates the pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mtv {
    /// Subtract from `x`
    PushX(f32),
    /// Subtract from `y`
    PushY(f32),
}

/// Compute the minimum translation vector of `moving` out of `fixed`
///
/// Expects the rects to overlap (callers test with [`Rect::overlaps`]
/// first). The four edge penetrations are compared per axis, then the axis
/// with the smaller absolute push wins; an exact tie resolves to the
/// vertical axis, which keeps corner landings deterministic.
pub fn minimum_translation(moving: &Rect, fixed: &Rect) -> Mtv {
    let overlap_left = moving.right() - fixed.left();
    let overlap_right = fixed.right() - moving.left();
    let overlap_top = moving.bottom() - fixed.top();
    let overlap_bottom = fixed.bottom() - moving.top();

    let push_x = if overlap_left < overlap_right {
        overlap_left
    } else {
        -overlap_right
    };
    let push_y = if overlap_top < overlap_bottom {
        overlap_top
    } else {
        -overlap_bottom
    };

    if push_x.abs() < push_y.abs() {
        Mtv::PushX(push_x)
    } else {
        Mtv::PushY(push_y)
    }
}
