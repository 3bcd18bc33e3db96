//! Drawable snapshot of a round
//!
//! The core never draws. Each frame it hands the platform a flat list of
//! colored rectangles and HUD strings to paint.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Entity, Rect, RoundState};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub rect: Rect,
    pub color: Color,
}

/// A line of HUD text, `position` is the top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub position: Vec2,
    pub size: u32,
    pub color: Color,
}

/// Everything the platform needs to paint one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear: Color,
    pub rects: Vec<DrawRect>,
    pub texts: Vec<HudText>,
}

const HUD_FONT: u32 = 20;
const GAME_OVER_FONT: u32 = 40;
const HUD_MARGIN: f32 = 25.0;

/// Ball, paddle and bricks share one color
const ENTITY_COLOR: Color = Color::RAYWHITE;

fn draw(entity: &Entity) -> DrawRect {
    DrawRect {
        rect: entity.rect(),
        color: ENTITY_COLOR,
    }
}

fn hud(text: String, x: f32, y: f32, size: u32) -> HudText {
    HudText {
        text,
        position: Vec2::new(x, y),
        size,
        color: Color::LIGHTGRAY,
    }
}

/// Build the frame for `state`
///
/// Bricks are always drawn; the ball and paddle only while in play. After
/// game over a centered "Game Over" line replaces them.
pub fn build_frame(state: &RoundState, fps: u32) -> Frame {
    let width = state.settings.arena_width;
    let height = state.settings.arena_height;

    let mut rects = Vec::with_capacity(state.bricks.len() + 2);
    rects.extend(state.bricks.iter().map(draw));

    let mut texts = Vec::with_capacity(4);
    if state.is_game_over() {
        texts.push(hud(
            "Game Over".to_string(),
            width / 2.0 - 25.0,
            height / 2.0,
            GAME_OVER_FONT,
        ));
    } else {
        rects.push(draw(&state.ball));
        rects.push(draw(&state.paddle));
    }

    texts.push(hud(format!("FPS: {fps}"), HUD_MARGIN, HUD_MARGIN, HUD_FONT));
    texts.push(hud(
        format!("Lives: {}", state.lives),
        width - 100.0,
        HUD_MARGIN,
        HUD_FONT,
    ));
    texts.push(hud(
        format!("Score: {}", state.score),
        width / 2.0,
        HUD_MARGIN,
        HUD_FONT,
    ));

    Frame {
        clear: Color::BLACK,
        rects,
        texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{TickInput, tick};

    fn hud_line<'a>(frame: &'a Frame, prefix: &str) -> Option<&'a str> {
        frame
            .texts
            .iter()
            .map(|t| t.text.as_str())
            .find(|t| t.starts_with(prefix))
    }

    #[test]
    fn test_frame_in_play() {
        let state = RoundState::new(Settings::default());
        let frame = build_frame(&state, 60);
        assert_eq!(frame.clear, Color::BLACK);
        // 80 bricks + ball + paddle
        assert_eq!(frame.rects.len(), 82);
        assert_eq!(frame.rects[80].rect, state.ball.rect());
        assert_eq!(frame.rects[81].rect, state.paddle.rect());
        assert_eq!(hud_line(&frame, "FPS: "), Some("FPS: 60"));
        assert_eq!(hud_line(&frame, "Lives: "), Some("Lives: 3"));
        assert_eq!(hud_line(&frame, "Score: "), Some("Score: 0"));
        assert_eq!(hud_line(&frame, "Game Over"), None);
    }

    #[test]
    fn test_frame_after_game_over() {
        let mut state = RoundState::new(Settings {
            starting_lives: 1,
            ..Settings::default()
        });
        state.ball.body.set_position(Vec2::new(100.0, 712.0));
        state.ball.body.velocity = Vec2::new(0.0, 3.0);
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        let frame = build_frame(&state, 59);
        assert_eq!(frame.rects.len(), 80);
        assert_eq!(hud_line(&frame, "Lives: "), Some("Lives: 0"));
        let game_over = frame
            .texts
            .iter()
            .find(|t| t.text == "Game Over")
            .map(|t| (t.position, t.size));
        assert_eq!(game_over, Some((Vec2::new(615.0, 360.0), 40)));
    }
}
