//! Per-frame simulation tick
//!
//! Advances the round by exactly one fixed-duration step. There is no delta
//! time: every velocity is a per-tick displacement.

use serde::{Deserialize, Serialize};

use super::bounce::{BounceTag, apply_bounce};
use super::collision::{Boundary, rects_overlap};
use super::paddle::{self, InputIntent};
use super::state::{RoundEvent, RoundState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Steering from the keyboard
    pub intent: InputIntent,
    /// Demo mode: the paddle follows the ball and `intent` is ignored
    pub autopilot: bool,
}

impl TickInput {
    pub fn steer(intent: InputIntent) -> Self {
        Self {
            intent,
            autopilot: false,
        }
    }
}

/// Advance the round by one tick
///
/// Order within a tick:
/// 1. paddle input, acceleration, side wall push-back and motion
/// 2. ball motion
/// 3. ball against bottom, top, left, right, then paddle (first match only)
/// 4. ball against bricks (first overlapping brick only), even on the tick
///    that ends the round
pub fn tick(state: &mut RoundState, input: &TickInput) {
    state.events.clear();

    if state.is_game_over() {
        return;
    }
    state.ticks += 1;

    let intent = if input.autopilot {
        autopilot_intent(state)
    } else {
        input.intent
    };
    paddle::step(
        &mut state.paddle,
        intent,
        &state.settings.paddle,
        &state.boundaries,
    );
    state.ball.update();

    let ball_rect = state.ball.rect();
    match state.boundaries.ball_contact(&ball_rect) {
        Some(Boundary::Bottom) => {
            state.lose_life();
        }
        Some(wall) => {
            let tag = match wall {
                Boundary::Left => BounceTag::Left,
                Boundary::Right => BounceTag::Right,
                _ => BounceTag::Top,
            };
            apply_bounce(&mut state.ball.body, tag);
            state.events.push(RoundEvent::WallBounce(wall));
        }
        None => {
            if rects_overlap(&ball_rect, &state.paddle.rect()) {
                apply_bounce(&mut state.ball.body, BounceTag::Under);
                state.events.push(RoundEvent::PaddleHit);
            }
        }
    }

    // A respawned ball is tested at its spawn point; the losing position is gone
    if let Some(index) = state.bricks.first_overlapping(&state.ball.rect()) {
        state.strike_brick(index);
    }
}

/// Steer the paddle under the ball, idling inside a quarter-paddle dead zone
pub fn autopilot_intent(state: &RoundState) -> InputIntent {
    let offset = state.ball.position().x - state.paddle.position().x;
    let dead_zone = state.paddle.body.size().x / 4.0;

    if offset < -dead_zone {
        InputIntent::MoveLeft
    } else if offset > dead_zone {
        InputIntent::MoveRight
    } else {
        InputIntent::Idle
    }
}
