//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-duration tick per call, no delta time
//! - No randomness
//! - Stable iteration order (brick set order)
//! - No rendering or platform dependencies

pub mod bounce;
pub mod bricks;
pub mod collision;
pub mod entity;
pub mod paddle;
pub mod state;
pub mod tick;

pub use bounce::{BounceTag, apply_bounce, bounce_velocity, brick_contact_tags};
pub use bricks::{BrickSet, BrickStrike};
pub use collision::{Boundaries, Boundary, rects_overlap};
pub use entity::{Body, Entity, EntityKind, Rect};
pub use paddle::InputIntent;
pub use state::{GamePhase, RoundEvent, RoundState};
pub use tick::{TickInput, autopilot_intent, tick};
