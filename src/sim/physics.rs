//! Per-tick integration of platform and player
//!
//! Units are pixels and ticks; y grows downward.

use super::config::RoundConfig;
use super::state::{RoundPhase, RoundState};

/// What a single step observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Still falling
    Continue,
    /// Player rose past the platform top; round already resolved
    PrematureFail,
    /// Platform bottom reached the ground; caller must judge the round
    Impact,
}

/// Advance the round by one tick
///
/// Does nothing once the round is resolved.
pub fn step(state: &mut RoundState, config: &RoundConfig) -> StepResult {
    if state.phase.is_resolved() {
        return StepResult::Continue;
    }

    state.ticks += 1;
    state.platform_y += config.fall_speed;

    let surface = config.surface_y(state.platform_y);
    if state.airborne {
        state.player_velocity_y += config.gravity;
        state.player_y += state.player_velocity_y;
    } else {
        state.player_y = surface;
    }

    // Hit the ceiling: the platform outran the jump
    if state.has_jumped && state.player_y <= state.platform_y {
        state.phase = RoundPhase::ResolvedPrematureFail;
        state.airborne = false;
        state.record_trail();
        return StepResult::PrematureFail;
    }

    // Landed back on the platform mid-fall; glued from here on
    if state.player_y > surface {
        state.player_y = surface;
        state.player_velocity_y = 0.0;
        state.airborne = false;
    }

    state.record_trail();

    if state.platform_y + config.platform_height as f32 >= config.ground_y as f32 {
        StepResult::Impact
    } else {
        StepResult::Continue
    }
}

/// Ticks until the platform bottom reaches the ground (0 if already there)
pub fn ticks_until_impact(state: &RoundState, config: &RoundConfig) -> u64 {
    let remaining = config.ground_y as f32 - (state.platform_y + config.platform_height as f32);
    if remaining <= 0.0 || config.fall_speed <= 0.0 {
        return 0;
    }
    (remaining / config.fall_speed).ceil() as u64
}
