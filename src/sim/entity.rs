//! Kinematic entities and their axis-aligned bounding rectangles
//!
//! Every entity in the round (ball, paddle, bricks) shares the same motion
//! state: a center position, a per-tick velocity and a fixed size. The
//! bounding rectangle is derived from those and must be resynced after every
//! position change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `center ± size / 2`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self::new(center.x - half.x, center.y - half.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Shared motion state: center position, velocity and derived rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    position: Vec2,
    /// Position delta per tick
    pub velocity: Vec2,
    size: Vec2,
    rect: Rect,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            rect: Rect::from_center(position, size),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Geometric center
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Bounding rectangle, synced to the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Teleport to `position`, resyncing the rectangle
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_rectangle();
    }

    /// `position += velocity`, no clamping and no time scaling
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    pub fn update_rectangle(&mut self) {
        self.rect = Rect::from_center(self.position, self.size);
    }

    /// Advance one tick: move, then resync the rectangle
    pub fn update(&mut self) {
        self.update_position();
        self.update_rectangle();
    }
}

/// What an entity is, carrying only the extra state its role needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Velocity only ever changes sign; speed is conserved
    Ball,
    /// Acceleration-driven; only `acceleration.x` is used
    Paddle { acceleration: Vec2 },
    /// Static until removed
    Brick,
}

/// A kinematic entity in the round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    pub fn ball(position: Vec2, size: Vec2, velocity: Vec2) -> Self {
        Self {
            body: Body::new(position, size).with_velocity(velocity),
            kind: EntityKind::Ball,
        }
    }

    pub fn paddle(position: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(position, size),
            kind: EntityKind::Paddle {
                acceleration: Vec2::ZERO,
            },
        }
    }

    pub fn brick(position: Vec2, size: Vec2) -> Self {
        Self {
            body: Body::new(position, size),
            kind: EntityKind::Brick,
        }
    }

    /// Paddle acceleration, `None` for other kinds
    pub fn acceleration(&self) -> Option<Vec2> {
        match self.kind {
            EntityKind::Paddle { acceleration } => Some(acceleration),
            _ => None,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position()
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.body.rect()
    }

    pub fn update(&mut self) {
        self.body.update();
    }
}
