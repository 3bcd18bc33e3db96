//! Brick Breaker - paddle-and-ball arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, round state)
//! - `render`: Drawable snapshot handed to the rendering collaborator
//! - `platform`: Window/input/draw collaborator interface and headless driver
//! - `settings`: Data-driven tuning and layout

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Fixed window/runtime constants (not user-configurable)
pub mod consts {
    /// Window width in pixels
    pub const SCREEN_WIDTH: f32 = 1280.0;
    /// Window height in pixels
    pub const SCREEN_HEIGHT: f32 = 720.0;
    /// Window title
    pub const WINDOW_TITLE: &str = "BreakOut";
    /// Target frame rate; one simulation tick per rendered frame
    pub const TARGET_FPS: u32 = 60;
}
