//! Headless platform
//!
//! Opens no window. Key state comes from a per-frame script, the window
//! "closes" after a fixed frame budget, and the last painted frame is kept
//! for inspection.

use std::collections::HashSet;

use glam::Vec2;

use super::{Key, Platform};
use crate::consts::TARGET_FPS;
use crate::render::{Color, DrawRect, Frame, HudText};
use crate::sim::Rect;

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    frame_budget: u64,
    frames: u64,
    /// Keys held on frame `i`; frames past the end fall back to `held`
    script: Vec<Vec<Key>>,
    held: HashSet<Key>,
    demo: bool,
    window: Option<(u32, u32, String)>,
    closed: bool,
    pending: Option<Frame>,
    last_frame: Option<Frame>,
}

impl HeadlessPlatform {
    /// Close after `frame_budget` frames
    pub fn new(frame_budget: u64) -> Self {
        Self {
            frame_budget,
            ..Self::default()
        }
    }

    /// Per-frame key script
    pub fn with_script(mut self, script: Vec<Vec<Key>>) -> Self {
        self.script = script;
        self
    }

    /// Let the paddle follow the ball
    pub fn with_demo_mode(mut self) -> Self {
        self.demo = true;
        self
    }

    /// Hold exactly `keys` for every unscripted frame
    pub fn hold(&mut self, keys: &[Key]) {
        self.held = keys.iter().copied().collect();
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    pub fn window(&self) -> Option<(u32, u32, String)> {
        self.window.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Platform for HeadlessPlatform {
    fn open(&mut self, width: u32, height: u32, title: &str, target_fps: u32) {
        log::info!("Headless window {width}x{height} \"{title}\" at {target_fps} fps");
        self.window = Some((width, height, title.to_string()));
        self.closed = false;
    }

    fn should_close(&self) -> bool {
        self.closed || self.frames >= self.frame_budget
    }

    fn close(&mut self) {
        log::info!("Headless window closed after {} frames", self.frames);
        self.closed = true;
    }

    fn is_key_down(&self, key: Key) -> bool {
        match self.script.get(self.frames as usize) {
            Some(keys) => keys.contains(&key),
            None => self.held.contains(&key),
        }
    }

    fn fps(&self) -> u32 {
        TARGET_FPS
    }

    fn begin_drawing(&mut self, clear: Color) {
        self.pending = Some(Frame {
            clear,
            rects: Vec::new(),
            texts: Vec::new(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if let Some(frame) = self.pending.as_mut() {
            frame.rects.push(DrawRect { rect, color });
        }
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: u32, color: Color) {
        if let Some(frame) = self.pending.as_mut() {
            frame.texts.push(HudText {
                text: text.to_string(),
                position,
                size,
                color,
            });
        }
    }

    fn end_drawing(&mut self) {
        if let Some(frame) = self.pending.take() {
            self.last_frame = Some(frame);
            self.frames += 1;
        }
    }

    fn demo_mode(&self) -> bool {
        self.demo
    }
}
