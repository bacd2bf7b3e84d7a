//! Per-round configuration
//!
//! The modifier schedule is a pure function of the level; only the platform
//! width and start offset consume randomness.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The part of the display the rules care about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    /// Y of the ground line (y grows downward)
    pub ground_y: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            ground_y: VIEWPORT_HEIGHT - GROUND_MARGIN,
        }
    }
}

/// Immutable parameters of a single round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub level: u32,
    /// Left edge of the platform (centered in the viewport)
    pub platform_x: i32,
    pub platform_width: i32,
    pub platform_height: i32,
    /// Top edge at round start, above the visible area
    pub platform_start_y: i32,
    pub player_size: i32,
    /// Pixels per tick
    pub fall_speed: f32,
    pub ground_y: i32,
    pub double_jump_available: bool,
    pub slow_motion: bool,
    /// Cosmetic only: draws a pad, never changes judgment
    pub safe_pad: bool,
    pub gravity: f32,
    pub jump_strength: f32,
}

impl RoundConfig {
    /// Player's fixed horizontal position (centered on the platform)
    pub fn player_x(&self) -> i32 {
        self.platform_x + (self.platform_width - self.player_size) / 2
    }

    /// Player Y when standing on the platform whose top edge is at `platform_y`
    #[inline]
    pub fn surface_y(&self, platform_y: f32) -> f32 {
        platform_y + (self.platform_height - self.player_size - SURFACE_INSET) as f32
    }

    /// Pad rectangle `(x, y, w, h)` drawn on safe-pad levels
    pub fn safe_pad_rect(&self) -> Option<(i32, i32, i32, i32)> {
        self.safe_pad.then(|| {
            (
                self.platform_x + 30,
                self.ground_y - 10,
                self.platform_width - 60,
                10,
            )
        })
    }
}

/// Fall speed for a level, including the slow-motion modifier
pub fn fall_speed_for_level(level: u32) -> f32 {
    let base = BASE_FALL_SPEED + level as f32 * FALL_SPEED_PER_LEVEL;
    if is_slow_motion(level) {
        base * SLOW_MOTION_FACTOR
    } else {
        base
    }
}

pub fn is_double_jump(level: u32) -> bool {
    level.is_multiple_of(DOUBLE_JUMP_EVERY)
}

pub fn is_slow_motion(level: u32) -> bool {
    level.is_multiple_of(SLOW_MOTION_EVERY)
}

pub fn is_safe_pad(level: u32) -> bool {
    level.is_multiple_of(SAFE_PAD_EVERY)
}

/// Generate the configuration for a round at `level`
pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R, viewport: Viewport) -> RoundConfig {
    let platform_width = rng.random_range(PLATFORM_MIN_WIDTH..=PLATFORM_MAX_WIDTH);
    let platform_start_y = -rng.random_range(PLATFORM_MIN_START_OFFSET..=PLATFORM_MAX_START_OFFSET);

    RoundConfig {
        level,
        platform_x: (viewport.width - platform_width) / 2,
        platform_width,
        platform_height: PLATFORM_HEIGHT,
        platform_start_y,
        player_size: PLAYER_SIZE,
        fall_speed: fall_speed_for_level(level),
        ground_y: viewport.ground_y,
        double_jump_available: is_double_jump(level),
        slow_motion: is_slow_motion(level),
        safe_pad: is_safe_pad(level),
        gravity: GRAVITY,
        jump_strength: JUMP_STRENGTH,
    }
}
