//! Paddle controller
//!
//! Held input ramps acceleration up to a cap; releasing input zeroes
//! acceleration and bleeds velocity off until the paddle snaps to rest.
//! Side walls push back on velocity rather than clamping position.

use serde::{Deserialize, Serialize};

use super::collision::{Boundaries, Boundary};
use super::entity::{Entity, EntityKind};
use crate::settings::PaddleTuning;

/// Discrete steering input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputIntent {
    MoveLeft,
    MoveRight,
    #[default]
    Idle,
}

/// Update paddle acceleration (and idle damping) from input
///
/// No-op for non-paddle entities.
pub fn apply_intent(paddle: &mut Entity, intent: InputIntent, tuning: &PaddleTuning) {
    let EntityKind::Paddle { acceleration } = &mut paddle.kind else {
        return;
    };

    match intent {
        InputIntent::MoveLeft => {
            acceleration.x = (acceleration.x - tuning.step).max(-tuning.max_acceleration);
        }
        InputIntent::MoveRight => {
            acceleration.x = (acceleration.x + tuning.step).min(tuning.max_acceleration);
        }
        InputIntent::Idle => {
            acceleration.x = 0.0;
            let vx = &mut paddle.body.velocity.x;
            if *vx != 0.0 {
                // Decay toward zero without crossing it
                *vx = vx.signum() * (vx.abs() - tuning.decay).max(0.0);
            }
            if vx.abs() < tuning.snap_threshold {
                *vx = 0.0;
            }
        }
    }
}

/// `velocity += acceleration`
pub fn accelerate(paddle: &mut Entity) {
    if let Some(acceleration) = paddle.acceleration() {
        paddle.body.velocity += acceleration;
    }
}

/// One controller tick: input, acceleration, wall push-back, then move
///
/// The wall test uses the rectangle from the previous tick, so a paddle held
/// against a wall is turned around before it can move further in.
pub fn step(
    paddle: &mut Entity,
    intent: InputIntent,
    tuning: &PaddleTuning,
    walls: &Boundaries,
) -> Option<Boundary> {
    apply_intent(paddle, intent, tuning);
    accelerate(paddle);
    let wall = rebound_from_walls(paddle, walls, tuning);
    paddle.update();
    wall
}

/// Soft wall clamp
///
/// Touching a side wall while still moving into it scales horizontal
/// velocity by `tuning.wall_rebound`. Position is untouched, so the paddle
/// may overlap the wall for a tick. Returns the wall that pushed back.
pub fn rebound_from_walls(
    paddle: &mut Entity,
    walls: &Boundaries,
    tuning: &PaddleTuning,
) -> Option<Boundary> {
    let wall = walls.side_contact(&paddle.rect())?;
    let vx = &mut paddle.body.velocity.x;
    let pushing_in = match wall {
        Boundary::Left => *vx < 0.0,
        Boundary::Right => *vx > 0.0,
        _ => false,
    };
    if pushing_in {
        *vx *= tuning.wall_rebound;
        Some(wall)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn paddle() -> Entity {
        Entity::paddle(Vec2::new(640.0, 670.0), Vec2::new(100.0, 20.0))
    }

    fn walls() -> Boundaries {
        Boundaries::new(1280.0, 720.0)
    }

    /// Paddle in the middle of an arena too wide to reach a wall
    fn open_field() -> (Entity, Boundaries) {
        let p = Entity::paddle(Vec2::new(500_000.0, 670.0), Vec2::new(100.0, 20.0));
        (p, Boundaries::new(1_000_000.0, 720.0))
    }

    fn accel_x(paddle: &Entity) -> f32 {
        paddle.acceleration().map(|a| a.x).unwrap_or(f32::NAN)
    }

    #[test]
    fn test_move_left_from_rest() {
        let tuning = PaddleTuning::default();
        let mut p = paddle();
        let mut last_x = p.position().x;
        let mut last_vx = 0.0;

        for _ in 0..3 {
            step(&mut p, InputIntent::MoveLeft, &tuning, &walls());
            assert!(p.velocity().x < last_vx);
            assert!(p.position().x < last_x);
            last_vx = p.velocity().x;
            last_x = p.position().x;
        }

        assert!((accel_x(&p) + 0.3).abs() < 1e-6);
        assert!((p.velocity().x + 0.6).abs() < 1e-5);
        assert!((p.position().x - 639.0).abs() < 1e-3);
        // Rectangle follows the position
        assert!((p.rect().center() - p.position()).length() < 1e-3);
    }

    #[test]
    fn test_acceleration_clamped_right() {
        let tuning = PaddleTuning::default();
        let mut p = paddle();
        for _ in 0..10 {
            step(&mut p, InputIntent::MoveRight, &tuning, &walls());
        }
        assert!((accel_x(&p) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_idle_decays_then_snaps() {
        let tuning = PaddleTuning::default();
        let mut p = paddle();
        p.body.velocity.x = 3.05;

        step(&mut p, InputIntent::Idle, &tuning, &walls());
        assert_eq!(accel_x(&p), 0.0);
        assert!((p.velocity().x - 2.85).abs() < 1e-5);

        for _ in 0..4 {
            step(&mut p, InputIntent::Idle, &tuning, &walls());
        }
        // 2.85 -> 2.65 -> 2.45 -> 2.25 -> 2.05
        assert!((p.velocity().x - 2.05).abs() < 1e-5);

        step(&mut p, InputIntent::Idle, &tuning, &walls());
        assert_eq!(p.velocity().x, 0.0);
    }

    #[test]
    fn test_idle_below_threshold_stops_immediately() {
        let tuning = PaddleTuning::default();
        let mut p = paddle();
        p.body.velocity.x = -1.5;
        let before = p.position();
        step(&mut p, InputIntent::Idle, &tuning, &walls());
        assert_eq!(p.velocity().x, 0.0);
        assert_eq!(p.position(), before);
    }

    #[test]
    fn test_idle_decay_never_overshoots() {
        let tuning = PaddleTuning {
            snap_threshold: 0.0,
            ..PaddleTuning::default()
        };
        let mut p = paddle();
        p.body.velocity.x = -0.15;
        apply_intent(&mut p, InputIntent::Idle, &tuning);
        assert_eq!(p.velocity().x, 0.0);
    }

    #[test]
    fn test_non_paddle_ignores_intent() {
        let tuning = PaddleTuning::default();
        let mut ball = Entity::ball(Vec2::ZERO, Vec2::splat(10.0), Vec2::new(2.0, 2.0));
        apply_intent(&mut ball, InputIntent::Idle, &tuning);
        assert_eq!(ball.velocity(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_left_wall_rebound() {
        let tuning = PaddleTuning::default();
        let walls = Boundaries::new(1280.0, 720.0);
        let mut p = Entity::paddle(Vec2::new(45.0, 670.0), Vec2::new(100.0, 20.0));
        p.body.velocity.x = -4.0;

        assert_eq!(rebound_from_walls(&mut p, &walls, &tuning), Some(Boundary::Left));
        assert_eq!(p.velocity().x, 2.0);
        // Position untouched
        assert_eq!(p.position(), Vec2::new(45.0, 670.0));

        // Moving away from the wall: no change
        assert_eq!(rebound_from_walls(&mut p, &walls, &tuning), None);
        assert_eq!(p.velocity().x, 2.0);
    }

    #[test]
    fn test_right_wall_rebound() {
        let tuning = PaddleTuning::default();
        let walls = Boundaries::new(1280.0, 720.0);
        let mut p = Entity::paddle(Vec2::new(1235.0, 670.0), Vec2::new(100.0, 20.0));
        p.body.velocity.x = 3.0;
        assert_eq!(rebound_from_walls(&mut p, &walls, &tuning), Some(Boundary::Right));
        assert_eq!(p.velocity().x, -1.5);
    }

    #[test]
    fn test_step_turns_around_before_entering_wall() {
        let tuning = PaddleTuning::default();
        // Left edge at 0.5, already overlapping the left strip
        let mut p = Entity::paddle(Vec2::new(50.5, 670.0), Vec2::new(100.0, 20.0));
        p.body.velocity.x = -0.2;

        let wall = step(&mut p, InputIntent::MoveLeft, &tuning, &walls());
        // -0.2 - 0.1 = -0.3, reversed and halved before moving
        assert_eq!(wall, Some(Boundary::Left));
        assert!((p.velocity().x - 0.15).abs() < 1e-5);
        assert!((p.position().x - 50.65).abs() < 1e-3);
    }

    #[test]
    fn test_held_input_stays_inside_arena() {
        let tuning = PaddleTuning::default();
        for (intent, x) in [(InputIntent::MoveLeft, 50.0), (InputIntent::MoveRight, 1230.0)] {
            let mut p = paddle();
            for t in 0..1000 {
                let speed = p.velocity().x.abs() + tuning.max_acceleration;
                step(&mut p, intent, &tuning, &walls());
                let rect = p.rect();
                // Never deeper than one tick of travel past the wall
                assert!(rect.left() > -speed, "tick {t}: left edge {}", rect.left());
                assert!(rect.right() < 1280.0 + speed, "tick {t}: right edge {}", rect.right());
            }
            assert!((p.position().x - x).abs() < 5.0, "settled at {}", p.position().x);
        }
    }

    fn intent_strategy() -> impl Strategy<Value = InputIntent> {
        prop_oneof![
            Just(InputIntent::MoveLeft),
            Just(InputIntent::MoveRight),
            Just(InputIntent::Idle),
        ]
    }

    proptest! {
        #[test]
        fn prop_acceleration_always_clamped(intents in prop::collection::vec(intent_strategy(), 1..200)) {
            let tuning = PaddleTuning::default();
            let (mut p, field) = open_field();
            for intent in intents {
                step(&mut p, intent, &tuning, &field);
                let ax = accel_x(&p);
                prop_assert!((-0.3..=0.3).contains(&ax), "acceleration {} out of range", ax);
            }
        }

        #[test]
        fn prop_idle_speed_non_increasing(vx in -40.0f32..40.0, ticks in 1usize..300) {
            let tuning = PaddleTuning::default();
            let (mut p, field) = open_field();
            p.body.velocity.x = vx;
            let mut speed = vx.abs();
            for _ in 0..ticks {
                step(&mut p, InputIntent::Idle, &tuning, &field);
                prop_assert_eq!(accel_x(&p), 0.0);
                let now = p.velocity().x.abs();
                prop_assert!(now <= speed);
                prop_assert!(now == 0.0 || now >= tuning.snap_threshold);
                speed = now;
            }
        }
    }
}
