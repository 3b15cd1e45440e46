//! Axis-aligned collision geometry
//!
//! Everything in the play field is a rectangle for collision purposes; the
//! ball is tested as the square bounding box of its circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `pos` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Square bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test: rectangles that only touch do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Side of a target rectangle the ball was pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Fixed tie-break order
    pub const ORDER: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Whether resolving against this side flips horizontal motion
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// Overlap depth of a moving rectangle into a target, per target side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Mover's right edge past the target's left edge
    pub left: f32,
    /// Target's right edge past the mover's left edge
    pub right: f32,
    /// Mover's bottom edge past the target's top edge
    pub top: f32,
    /// Target's bottom edge past the mover's top edge
    pub bottom: f32,
}

impl Penetration {
    pub fn between(mover: &Rect, target: &Rect) -> Self {
        Self {
            left: mover.right() - target.left(),
            right: target.right() - mover.left(),
            top: mover.bottom() - target.top(),
            bottom: target.bottom() - mover.top(),
        }
    }

    pub fn depth(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    /// Side with the smallest depth; ties go to the earlier side in
    /// left, right, top, bottom order
    pub fn shallowest(&self) -> Side {
        let mut best = Side::Left;
        for side in Side::ORDER {
            if self.depth(side) < self.depth(best) {
                best = side;
            }
        }
        best
    }
}

/// Center of a circle of `radius` resting flush against `side` of `target`,
/// keeping the other coordinate of `center`
pub fn flush_against(target: &Rect, side: Side, center: Vec2, radius: f32) -> Vec2 {
    match side {
        Side::Left => Vec2::new(target.left() - radius, center.y),
        Side::Right => Vec2::new(target.right() + radius, center.y),
        Side::Top => Vec2::new(center.x, target.top() - radius),
        Side::Bottom => Vec2::new(center.x, target.bottom() + radius),
    }
}

/// Flip the velocity component matching the side that was hit
#[inline]
pub fn reflect(velocity: Vec2, side: Side) -> Vec2 {
    if side.is_horizontal() {
        Vec2::new(-velocity.x, velocity.y)
    } else {
        Vec2::new(velocity.x, -velocity.y)
    }
}
