//! Platform abstraction layer
//!
//! The window, keyboard, frame pacing and draw calls belong to an external
//! collaborator. This module names the narrow surface the game needs from it:
//! - Window lifecycle (open, should-close, close)
//! - Key-down polling
//! - FPS query
//! - Rectangle and text drawing

pub mod headless;

pub use headless::HeadlessPlatform;

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS, WINDOW_TITLE};
use crate::render::{Color, Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{InputIntent, Rect, RoundState, TickInput, tick};

/// Logical keys the game polls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    A,
    D,
}

/// Window/input/draw collaborator
pub trait Platform {
    fn open(&mut self, width: u32, height: u32, title: &str, target_fps: u32);
    fn should_close(&self) -> bool;
    fn close(&mut self);

    fn is_key_down(&self, key: Key) -> bool;
    /// Measured frames per second
    fn fps(&self) -> u32;

    fn begin_drawing(&mut self, clear: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, size: u32, color: Color);
    fn end_drawing(&mut self);

    /// Let the paddle steer itself
    fn demo_mode(&self) -> bool {
        false
    }

    /// Paint a whole frame
    fn draw_frame(&mut self, frame: &Frame) {
        self.begin_drawing(frame.clear);
        for r in &frame.rects {
            self.draw_rect(r.rect, r.color);
        }
        for t in &frame.texts {
            self.draw_text(&t.text, t.position, t.size, t.color);
        }
        self.end_drawing();
    }
}

/// Map held keys to a steering intent; left wins when both are held
pub fn read_intent<P: Platform + ?Sized>(platform: &P) -> InputIntent {
    if platform.is_key_down(Key::Left) || platform.is_key_down(Key::A) {
        InputIntent::MoveLeft
    } else if platform.is_key_down(Key::Right) || platform.is_key_down(Key::D) {
        InputIntent::MoveRight
    } else {
        InputIntent::Idle
    }
}

/// Run one round until the platform asks to close
///
/// One tick per drawn frame; pacing is the platform's job. Returns the final
/// round state.
pub fn run<P: Platform + ?Sized>(platform: &mut P, settings: Settings) -> RoundState {
    platform.open(
        SCREEN_WIDTH as u32,
        SCREEN_HEIGHT as u32,
        WINDOW_TITLE,
        TARGET_FPS,
    );

    let mut state = RoundState::new(settings);
    let mut was_over = state.is_game_over();

    while !platform.should_close() {
        let input = TickInput {
            intent: read_intent(&*platform),
            autopilot: platform.demo_mode(),
        };
        tick(&mut state, &input);

        if state.is_game_over() && !was_over {
            log::info!("Round ended after {} ticks", state.ticks);
            was_over = true;
        }

        let frame = build_frame(&state, platform.fps());
        platform.draw_frame(&frame);
    }

    platform.close();
    state
}
