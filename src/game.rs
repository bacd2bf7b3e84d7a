//! Host-facing game driver
//!
//! Owns the session, the progression tracker and the current round, and
//! performs the hand-off between them. Hosts call `on_jump_requested` on
//! input, `on_tick` once per frame, and `next_round` after their own result
//! pause.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::HighscoreStore;
use crate::platform::Clock;
use crate::settings::Settings;
use crate::sim::{
    GameEvent, NextRoundSeed, Outcome, ProgressionTracker, RoundMachine, RoundStatus, SessionState,
    generate,
};
use crate::ui::{HudSnapshot, ResultScreen};

/// Outcome of a finished round and its effect on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub seed: NextRoundSeed,
}

/// A play session
#[derive(Debug)]
pub struct Game<S, C> {
    settings: Settings,
    tracker: ProgressionTracker<S>,
    session: SessionState,
    rng: Pcg32,
    clock: C,
    round: RoundMachine<C>,
    summary: Option<RoundSummary>,
    events: Vec<GameEvent>,
    rounds_played: u64,
}

impl<S: HighscoreStore, C: Clock + Clone> Game<S, C> {
    /// Start a session (highscore loaded from `store`) and its first round
    pub fn new(settings: Settings, store: S, clock: C, seed: u64) -> Self {
        let tracker = ProgressionTracker::new(store);
        let session = tracker.load_session();
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Self::make_round(&settings, &mut rng, &clock, session.level);
        log::info!("Session start: best {}", session.highscore);

        let mut game = Self {
            settings,
            tracker,
            session,
            rng,
            clock,
            round,
            summary: None,
            events: Vec::new(),
            rounds_played: 0,
        };
        game.collect_round_events();
        game
    }

    fn make_round(settings: &Settings, rng: &mut Pcg32, clock: &C, level: u32) -> RoundMachine<C> {
        let config = generate(level, rng, settings.viewport());
        let mut round = RoundMachine::new(config, clock.clone(), settings.trail_length);
        // Pre-round nudge is pure presentation flavor
        if rng.random_bool(settings.effective_nudge_chance()) {
            round.nudge_platform(settings.nudge_offset);
        }
        round
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn round(&self) -> &RoundMachine<C> {
        &self.round
    }

    pub fn store(&self) -> &S {
        self.tracker.store()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Result of the current round, once resolved
    pub fn summary(&self) -> Option<RoundSummary> {
        self.summary
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Jump input from the host
    pub fn on_jump_requested(&mut self) {
        self.round.on_jump_requested();
        self.collect_round_events();
    }

    /// Advance the current round one tick; applies progression on resolution
    pub fn on_tick(&mut self, now: std::time::Duration) -> RoundStatus {
        let status = self.round.on_tick(now);
        self.collect_round_events();

        if let RoundStatus::Resolved(outcome) = status
            && self.summary.is_none()
        {
            let seed = self.tracker.apply(outcome, &mut self.session);
            if outcome.is_perfect() {
                self.events.push(GameEvent::PerfectJump {
                    combo: self.session.combo_counter,
                });
            }
            if seed.new_highscore {
                self.events.push(GameEvent::NewHighscore {
                    level: self.session.highscore,
                });
            }
            self.summary = Some(RoundSummary { outcome, seed });
            self.rounds_played += 1;
        }

        status
    }

    /// Start the next round once the current one is resolved
    ///
    /// Returns false (and does nothing) while the round is still falling.
    pub fn next_round(&mut self) -> bool {
        if self.summary.is_none() {
            return false;
        }
        self.round = Self::make_round(
            &self.settings,
            &mut self.rng,
            &self.clock,
            self.session.level,
        );
        self.summary = None;
        self.collect_round_events();
        true
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::new(self.round.config(), &self.session)
    }

    pub fn result_screen(&self) -> Option<ResultScreen> {
        self.summary
            .map(|summary| ResultScreen::new(summary.outcome, &summary.seed))
    }

    /// Take queued events (audio cues etc.)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn collect_round_events(&mut self) {
        self.events.extend(self.round.drain_events());
    }
}
