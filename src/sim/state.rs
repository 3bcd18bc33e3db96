//! Round state and core simulation types
//!
//! The round exclusively owns the ball, the paddle and the brick set. All
//! mutation goes through [`super::tick`] and the helpers here.

use serde::{Deserialize, Serialize};

use super::bounce::{BounceTag, resolve_brick_contact};
use super::bricks::{BrickSet, BrickStrike};
use super::collision::{Boundaries, Boundary};
use super::entity::Entity;
use crate::settings::Settings;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball in play (respawn happens within the same tick)
    #[default]
    Playing,
    /// Out of lives; nothing moves until the round is rebuilt
    GameOver,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// Ball reached the bottom edge and was respawned
    BallLost { lives_left: u32 },
    /// Ball bounced off an arena edge
    WallBounce(Boundary),
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball struck a brick
    BrickHit {
        index: usize,
        removed: bool,
        tags: Vec<BounceTag>,
    },
    /// Last life lost
    GameOver,
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub settings: Settings,
    pub boundaries: Boundaries,
    pub ball: Entity,
    pub paddle: Entity,
    pub bricks: BrickSet,
    pub lives: u32,
    /// One point per brick struck
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated while in play
    pub ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<RoundEvent>,
}

impl RoundState {
    /// Start a fresh round from `settings`
    pub fn new(settings: Settings) -> Self {
        let spawn = settings.paddle_spawn;
        let state = Self {
            boundaries: Boundaries::new(settings.arena_width, settings.arena_height),
            ball: spawn_ball(&settings),
            paddle: Entity::paddle(spawn.position, spawn.size),
            bricks: BrickSet::from_layout(&settings.bricks),
            lives: settings.starting_lives,
            score: 0,
            phase: if settings.starting_lives == 0 {
                GamePhase::GameOver
            } else {
                GamePhase::Playing
            },
            ticks: 0,
            events: Vec::new(),
            settings,
        };
        log::info!(
            "Round started: {} lives, {} bricks",
            state.lives,
            state.bricks.len()
        );
        state
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Put the ball back at its spawn position and velocity
    pub fn respawn_ball(&mut self) {
        self.ball = spawn_ball(&self.settings);
    }

    /// Lose a life and respawn; enters game over when none remain
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.respawn_ball();
        self.events.push(RoundEvent::BallLost {
            lives_left: self.lives,
        });
        log::info!("Ball lost, {} lives left", self.lives);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(RoundEvent::GameOver);
            log::info!("Game over, final score {}", self.score);
        }
    }

    /// Resolve a hit on the brick at `index`
    ///
    /// Bounces the ball, removes the brick unless it is the last one, and
    /// scores a point either way.
    pub fn strike_brick(&mut self, index: usize) -> Option<BrickStrike> {
        let brick = self.bricks.get(index)?;
        let tags = resolve_brick_contact(&mut self.ball.body, &brick.body);
        let removed = self.bricks.remove_guarded(index);
        self.score += 1;

        if removed {
            log::debug!("Brick {index} destroyed, score {}", self.score);
        } else {
            log::debug!("Last brick struck and kept, score {}", self.score);
        }
        self.events.push(RoundEvent::BrickHit {
            index,
            removed,
            tags,
        });
        Some(BrickStrike { index, removed })
    }
}

fn spawn_ball(settings: &Settings) -> Entity {
    let spawn = settings.ball_spawn;
    Entity::ball(spawn.position, spawn.size, spawn.velocity)
}
