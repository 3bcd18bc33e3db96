//! Game settings and tuning
//!
//! Every gameplay constant lives here and is handed to the simulation at
//! construction. Defaults reproduce the classic 1280x720 layout.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings JSON is malformed
    Json(serde_json::Error),
    /// Settings parsed but describe an unplayable round
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {e}"),
            SettingsError::Json(e) => write!(f, "JSON error: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Paddle acceleration/decay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    /// Acceleration added per tick of held input
    pub step: f32,
    /// Acceleration magnitude cap
    pub max_acceleration: f32,
    /// Velocity removed per tick with no input (2 * step)
    pub decay: f32,
    /// Below this speed an idle paddle stops dead
    pub snap_threshold: f32,
    /// Velocity factor applied when pushing into a side wall
    pub wall_rebound: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            step: 0.1,
            max_acceleration: 0.3,
            decay: 0.2,
            snap_threshold: 2.0,
            wall_rebound: -0.5,
        }
    }
}

/// Ball respawn state, used at round start and after every lost life
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSpawn {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Default for BallSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            velocity: Vec2::new(2.0, 2.0),
            size: Vec2::new(10.0, 10.0),
        }
    }
}

/// Paddle start state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSpawn {
    pub position: Vec2,
    pub size: Vec2,
}

impl Default for PaddleSpawn {
    fn default() -> Self {
        Self {
            position: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 50.0),
            size: Vec2::new(100.0, 20.0),
        }
    }
}

/// Grid of bricks, laid out row by row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: u32,
    pub per_row: u32,
    /// Center of the first brick
    pub origin: Vec2,
    /// Center-to-center distance between neighbours
    pub spacing: Vec2,
    pub size: Vec2,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: 4,
            per_row: 20,
            origin: Vec2::new(50.0, 50.0),
            spacing: Vec2::new(50.0, 15.0),
            size: Vec2::new(48.0, 10.0),
        }
    }
}

impl BrickLayout {
    pub fn count(&self) -> usize {
        self.rows as usize * self.per_row as usize
    }

    /// Brick centers in row-major order
    pub fn centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.per_row).map(move |col| {
                self.origin + Vec2::new(col as f32 * self.spacing.x, row as f32 * self.spacing.y)
            })
        })
    }
}

/// Complete round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width (boundaries sit on its edges)
    pub arena_width: f32,
    /// Arena height
    pub arena_height: f32,
    pub starting_lives: u32,
    pub paddle: PaddleTuning,
    pub paddle_spawn: PaddleSpawn,
    pub ball_spawn: BallSpawn,
    pub bricks: BrickLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: SCREEN_WIDTH,
            arena_height: SCREEN_HEIGHT,
            starting_lives: 3,
            paddle: PaddleTuning::default(),
            paddle_spawn: PaddleSpawn::default(),
            ball_spawn: BallSpawn::default(),
            bricks: BrickLayout::default(),
        }
    }
}

impl Settings {
    /// Default file looked up by the binary
    pub const DEFAULT_PATH: &'static str = "breakout.json";

    /// Parse and validate settings from JSON; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {e}; using default settings", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject layouts the simulation cannot run
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |v: Vec2| v.x > 0.0 && v.y > 0.0;

        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(SettingsError::Invalid("arena must have a positive size".into()));
        }
        if self.arena_width != SCREEN_WIDTH || self.arena_height != SCREEN_HEIGHT {
            return Err(SettingsError::Invalid(format!(
                "arena {}x{} must match the {SCREEN_WIDTH}x{SCREEN_HEIGHT} window",
                self.arena_width, self.arena_height
            )));
        }
        if !positive(self.ball_spawn.size) {
            return Err(SettingsError::Invalid("ball size must be positive".into()));
        }
        if !positive(self.paddle_spawn.size) {
            return Err(SettingsError::Invalid("paddle size must be positive".into()));
        }
        if !positive(self.bricks.size) {
            return Err(SettingsError::Invalid("brick size must be positive".into()));
        }
        if self.bricks.count() == 0 {
            return Err(SettingsError::Invalid("brick layout has no bricks".into()));
        }
        let tuning = &self.paddle;
        if tuning.step < 0.0
            || tuning.max_acceleration < 0.0
            || tuning.decay < 0.0
            || tuning.snap_threshold < 0.0
        {
            return Err(SettingsError::Invalid("paddle tuning must be non-negative".into()));
        }
        Ok(())
    }
}
