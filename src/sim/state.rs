//! Round state and core simulation types

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::RoundConfig;
use super::judge::Outcome;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Platform is falling, input accepted
    Falling,
    /// Jump landed inside the save window at impact
    ResolvedSurvived,
    /// Impact without a well-timed jump
    ResolvedSmashed,
    /// Player rose past the platform top before impact
    ResolvedPrematureFail,
}

impl RoundPhase {
    pub fn is_resolved(self) -> bool {
        self != RoundPhase::Falling
    }
}

/// Discrete events for audio/visual cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began falling
    RoundStarted { level: u32 },
    /// `double` is set for the second jump of a round
    JumpTriggered { double: bool },
    /// Perfect save; `combo` counts consecutive perfects
    PerfectJump { combo: u32 },
    /// Round reached a terminal phase
    RoundResolved { outcome: Outcome },
    /// Session best was raised
    NewHighscore { level: u32 },
}

/// Trail point for player rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub x: i32,
    pub y: f32,
}

/// Mutable state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    /// Top edge of the platform. Never decreases.
    pub platform_y: f32,
    pub player_x: i32,
    pub player_y: f32,
    pub player_velocity_y: f32,
    pub has_jumped: bool,
    /// Instant of the most recent jump
    pub jump_timestamp: Option<Duration>,
    pub double_jump_used: bool,
    /// In projectile motion (cleared when the player lands back on the platform)
    pub airborne: bool,
    pub phase: RoundPhase,
    /// Ticks stepped so far
    pub ticks: u64,
    /// Recent player positions (newest first)
    #[serde(skip)]
    pub trail: VecDeque<TrailPoint>,
    #[serde(skip)]
    trail_length: usize,
}

impl RoundState {
    /// Fresh state for a round: platform at its start height, player on it
    pub fn new(config: &RoundConfig, trail_length: usize) -> Self {
        let platform_y = config.platform_start_y as f32;
        Self {
            platform_y,
            player_x: config.player_x(),
            player_y: config.surface_y(platform_y),
            player_velocity_y: 0.0,
            has_jumped: false,
            jump_timestamp: None,
            double_jump_used: false,
            airborne: false,
            phase: RoundPhase::Falling,
            ticks: 0,
            trail: VecDeque::with_capacity(trail_length),
            trail_length,
        }
    }

    /// Whether a jump request would be honored right now
    pub fn can_jump(&self, config: &RoundConfig) -> bool {
        if self.phase.is_resolved() {
            return false;
        }
        !self.has_jumped || (config.double_jump_available && !self.double_jump_used)
    }

    /// Record current position to trail (call each tick)
    pub fn record_trail(&mut self) {
        if self.trail_length == 0 {
            return;
        }
        self.trail.push_front(TrailPoint {
            x: self.player_x,
            y: self.player_y,
        });
        self.trail.truncate(self.trail_length);
    }
}
