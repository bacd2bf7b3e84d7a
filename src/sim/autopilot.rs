//! Idle/demo mode input
//!
//! Predicts the impact tick and asks for a jump a few ticks before it.

use rand::Rng;

use super::config::RoundConfig;
use super::physics::ticks_until_impact;
use super::state::RoundState;

/// Jumps `lead_ticks` ticks before the platform hits the ground
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autopilot {
    pub lead_ticks: u64,
}

impl Autopilot {
    pub fn new(lead_ticks: u64) -> Self {
        Self { lead_ticks }
    }

    /// Random lead between `min` and `max` ticks (inclusive), for variety
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self::new(rng.random_range(lo..=hi))
    }

    /// Whether to request a jump before the next tick
    pub fn wants_jump(&self, state: &RoundState, config: &RoundConfig) -> bool {
        if !state.can_jump(config) {
            return false;
        }
        // Second jump only once back on the platform
        if state.has_jumped && state.airborne {
            return false;
        }
        ticks_until_impact(state, config) <= self.lead_ticks
    }
}
