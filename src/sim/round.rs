//! Round state machine
//!
//! `Falling` until physics reports impact or a premature fail, then one of the
//! terminal phases. The host drives it with `on_tick` and feeds input through
//! `on_jump_requested`; progression is applied by the caller once the round
//! resolves.

use std::time::Duration;

use super::config::RoundConfig;
use super::judge::{Outcome, SmashCause, judge};
use super::physics::{StepResult, step};
use super::state::{GameEvent, RoundPhase, RoundState};
use crate::platform::Clock;

/// Round status reported to the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Falling,
    Resolved(Outcome),
}

/// Sequences a single round
#[derive(Debug)]
pub struct RoundMachine<C> {
    config: RoundConfig,
    state: RoundState,
    clock: C,
    outcome: Option<Outcome>,
    last_tick: Option<Duration>,
    events: Vec<GameEvent>,
}

impl<C: Clock> RoundMachine<C> {
    /// Start a round in the `Falling` phase
    pub fn new(config: RoundConfig, clock: C, trail_length: usize) -> Self {
        let state = RoundState::new(&config, trail_length);
        log::info!(
            "Round start: level {} fall_speed {:.2} start_y {}{}{}{}",
            config.level,
            config.fall_speed,
            config.platform_start_y,
            if config.slow_motion { " [slow]" } else { "" },
            if config.double_jump_available {
                " [double]"
            } else {
                ""
            },
            if config.safe_pad { " [pad]" } else { "" },
        );
        let events = vec![GameEvent::RoundStarted {
            level: config.level,
        }];
        Self {
            config,
            state,
            clock,
            outcome: None,
            last_tick: None,
            events,
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn status(&self) -> RoundStatus {
        match self.outcome {
            Some(outcome) => RoundStatus::Resolved(outcome),
            None => RoundStatus::Falling,
        }
    }

    /// Shift the platform down before the first tick (host flavor)
    ///
    /// Ignored once the round has started moving.
    pub fn nudge_platform(&mut self, offset: f32) {
        if self.state.ticks > 0 || self.is_resolved() || offset <= 0.0 {
            return;
        }
        self.state.platform_y += offset;
        self.state.player_y = self.config.surface_y(self.state.platform_y);
    }

    /// Handle a jump input. No-op when no jump is permitted.
    pub fn on_jump_requested(&mut self) {
        if !self.state.can_jump(&self.config) {
            log::debug!("Jump ignored");
            return;
        }

        let double = self.state.has_jumped;
        if double {
            self.state.double_jump_used = true;
        }
        self.state.has_jumped = true;
        self.state.airborne = true;
        self.state.jump_timestamp = Some(self.clock.now());
        self.state.player_velocity_y = self.config.jump_strength;

        log::debug!(
            "Jump{} at {:?} (tick {})",
            if double { " (double)" } else { "" },
            self.state.jump_timestamp,
            self.state.ticks
        );
        self.events.push(GameEvent::JumpTriggered { double });
    }

    /// Advance one tick. `now` must come from the same monotonic clock.
    ///
    /// Impact is judged at the later of `now` and the clock's current reading,
    /// so a jump handled after the host sampled `now` still precedes impact.
    pub fn on_tick(&mut self, now: Duration) -> RoundStatus {
        if let Some(outcome) = self.outcome {
            return RoundStatus::Resolved(outcome);
        }

        let now = match self.last_tick {
            Some(last) if now < last => {
                log::warn!(
                    "Tick time went backwards ({:?} < {:?}), clamping",
                    now,
                    last
                );
                last
            }
            _ => now,
        };
        self.last_tick = Some(now);

        let outcome = match step(&mut self.state, &self.config) {
            StepResult::Continue => return RoundStatus::Falling,
            StepResult::PrematureFail => Outcome::Smashed(SmashCause::HitCeiling),
            StepResult::Impact => {
                let impact_at = self.clock.now().max(now);
                let outcome = judge(self.state.jump_timestamp, impact_at);
                self.state.phase = if outcome.survived() {
                    RoundPhase::ResolvedSurvived
                } else {
                    RoundPhase::ResolvedSmashed
                };
                outcome
            }
        };

        log::info!(
            "Round resolved at level {} after {} ticks: {:?}",
            self.config.level,
            self.state.ticks,
            outcome
        );
        self.outcome = Some(outcome);
        self.events.push(GameEvent::RoundResolved { outcome });
        RoundStatus::Resolved(outcome)
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
