//! Axis-aligned collision detection
//!
//! One primitive covers every pair in the game: strict AABB overlap, no
//! contact manifold, no penetration depth. Tests are point-in-time against
//! the current rectangles, so a ball fast enough to skip past a thin
//! rectangle in one tick tunnels through it.

use serde::{Deserialize, Serialize};

use super::entity::Rect;

/// AABB intersection test
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Arena edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    Top,
    Bottom,
    Left,
    Right,
}

/// One-pixel strips along the arena edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boundaries {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Boundaries {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            top: Rect::new(0.0, 0.0, width, 1.0),
            bottom: Rect::new(0.0, height - 1.0, width, 1.0),
            left: Rect::new(0.0, 0.0, 1.0, height),
            right: Rect::new(width - 1.0, 0.0, 1.0, height),
        }
    }

    pub fn rect(&self, boundary: Boundary) -> Rect {
        match boundary {
            Boundary::Top => self.top,
            Boundary::Bottom => self.bottom,
            Boundary::Left => self.left,
            Boundary::Right => self.right,
        }
    }

    /// First boundary touched by `rect`, tested bottom, top, left, right
    ///
    /// Bottom wins so a ball wedged in a bottom corner is always lost rather
    /// than bounced.
    pub fn ball_contact(&self, rect: &Rect) -> Option<Boundary> {
        [Boundary::Bottom, Boundary::Top, Boundary::Left, Boundary::Right]
            .into_iter()
            .find(|&b| rects_overlap(rect, &self.rect(b)))
    }

    /// Side wall touched by `rect`, left before right
    pub fn side_contact(&self, rect: &Rect) -> Option<Boundary> {
        [Boundary::Left, Boundary::Right]
            .into_iter()
            .find(|&b| rects_overlap(rect, &self.rect(b)))
    }
}
