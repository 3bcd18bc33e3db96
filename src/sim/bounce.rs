//! Bounce resolution
//!
//! Contacts are classified into a [`BounceTag`], and each tag maps to a
//! velocity sign transform. Speed is never rescaled.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;

/// Which side of an obstacle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BounceTag {
    /// Flip vertical direction
    Top,
    /// Flip horizontal direction
    Left,
    /// Flip horizontal direction
    Right,
    /// Force upward motion
    Under,
}

/// Apply a bounce transform to a velocity
#[inline]
pub fn bounce_velocity(velocity: Vec2, tag: BounceTag) -> Vec2 {
    match tag {
        BounceTag::Top => Vec2::new(velocity.x, -velocity.y),
        BounceTag::Left | BounceTag::Right => Vec2::new(-velocity.x, velocity.y),
        BounceTag::Under => Vec2::new(velocity.x, -velocity.y.abs()),
    }
}

pub fn apply_bounce(body: &mut Body, tag: BounceTag) {
    body.velocity = bounce_velocity(body.velocity, tag);
}

/// Classify a ball-brick contact by where the ball's center sits
///
/// The four checks are independent: near a corner two can fire and both
/// flips apply, in the order below/above/left/right. A center inside the
/// brick's extents yields no tags and leaves the velocity alone.
pub fn brick_contact_tags(ball_center: Vec2, brick: &Body) -> Vec<BounceTag> {
    let center = brick.position();
    let half = brick.half_extents();
    let mut tags = Vec::with_capacity(2);

    // Below the brick: reuse Top to flip Y
    if ball_center.y > center.y + half.y {
        tags.push(BounceTag::Top);
    }
    if ball_center.y < center.y - half.y {
        tags.push(BounceTag::Under);
    }
    if ball_center.x < center.x - half.x {
        tags.push(BounceTag::Left);
    }
    if ball_center.x > center.x + half.x {
        tags.push(BounceTag::Right);
    }
    tags
}

/// Resolve a ball-brick contact, returning the tags that were applied
pub fn resolve_brick_contact(ball: &mut Body, brick: &Body) -> Vec<BounceTag> {
    let tags = brick_contact_tags(ball.position(), brick);
    for &tag in &tags {
        apply_bounce(ball, tag);
    }
    tags
}
