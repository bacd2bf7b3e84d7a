//! Level, combo and highscore progression

use serde::{Deserialize, Serialize};

use super::judge::Outcome;
use crate::consts::{COMBO_BONUS_EVERY, PERFECT_LEVEL_BONUS};
use crate::highscores::{HighscoreStore, MIN_HIGHSCORE};

/// Progress that outlives a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub level: u32,
    /// Consecutive perfect jumps
    pub combo_counter: u32,
    /// Best level ever reached. Never decreases.
    pub highscore: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            level: 1,
            combo_counter: 0,
            highscore: MIN_HIGHSCORE,
        }
    }
}

impl SessionState {
    /// Fresh session with the persisted highscore
    pub fn with_highscore(highscore: u32) -> Self {
        Self {
            highscore: highscore.max(MIN_HIGHSCORE),
            ..Self::default()
        }
    }
}

/// What the host needs to start the next round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextRoundSeed {
    /// Level the next round is generated for
    pub next_level: u32,
    /// Level reached by the round just played (before any reset)
    pub reached_level: u32,
    /// Levels gained (0 on a smash)
    pub levels_gained: u32,
    pub new_highscore: bool,
    /// A new highscore could not be saved
    pub persist_failed: bool,
}

/// Applies round outcomes to the session and persists new highscores
#[derive(Debug)]
pub struct ProgressionTracker<S> {
    store: S,
}

impl<S: HighscoreStore> ProgressionTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Start a session from the stored highscore
    pub fn load_session(&self) -> SessionState {
        SessionState::with_highscore(self.store.load_highscore())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a round outcome
    pub fn apply(&mut self, outcome: Outcome, session: &mut SessionState) -> NextRoundSeed {
        let reached_level = session.level;

        let levels_gained = match outcome {
            Outcome::Smashed(_) => {
                session.combo_counter = 0;
                session.level = 1;
                0
            }
            Outcome::Survived { perfect: false } => {
                session.combo_counter = 0;
                1
            }
            Outcome::Survived { perfect: true } => {
                session.combo_counter += 1;
                perfect_bonus(session.combo_counter)
            }
        };
        session.level += levels_gained;

        let mut seed = NextRoundSeed {
            next_level: session.level,
            reached_level,
            levels_gained,
            new_highscore: false,
            persist_failed: false,
        };

        if session.level > session.highscore {
            session.highscore = session.level;
            seed.new_highscore = true;
            log::info!("New highscore: {}", session.highscore);
            if let Err(e) = self.store.save_highscore(session.highscore) {
                log::warn!("Highscore {} not saved: {}", session.highscore, e);
                seed.persist_failed = true;
            }
        }

        seed
    }
}

/// Levels earned by a perfect jump at the given combo count
pub fn perfect_bonus(combo_counter: u32) -> u32 {
    if combo_counter > 0 && combo_counter.is_multiple_of(COMBO_BONUS_EVERY) {
        PERFECT_LEVEL_BONUS + 1
    } else {
        PERFECT_LEVEL_BONUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryStore;
    use crate::sim::judge::SmashCause;
    use proptest::prelude::*;

    const PERFECT: Outcome = Outcome::Survived { perfect: true };
    const HIT: Outcome = Outcome::Survived { perfect: false };
    const SMASH: Outcome = Outcome::Smashed(SmashCause::NoJump);

    #[test]
    fn test_perfect_from_level_one() {
        let mut tracker = ProgressionTracker::new(MemoryStore::new());
        let mut session = tracker.load_session();

        let seed = tracker.apply(PERFECT, &mut session);
        assert_eq!(session.combo_counter, 1);
        assert_eq!(session.level, 3);
        assert_eq!(seed.next_level, 3);
        assert_eq!(seed.reached_level, 1);
        assert!(seed.new_highscore);
        assert_eq!(tracker.store().stored(), Some(3));
    }

    #[test]
    fn test_combo_bonus_sequence() {
        let mut tracker = ProgressionTracker::new(MemoryStore::new());
        let mut session = tracker.load_session();
        let gains: Vec<u32> = (0..6)
            .map(|_| tracker.apply(PERFECT, &mut session).levels_gained)
            .collect();
        assert_eq!(gains, vec![2, 2, 3, 2, 2, 3]);
        assert_eq!(session.combo_counter, 6);
        assert_eq!(session.level, 15);
    }

    #[test]
    fn test_plain_hit_resets_combo() {
        let mut tracker = ProgressionTracker::new(MemoryStore::new());
        let mut session = tracker.load_session();
        tracker.apply(PERFECT, &mut session);
        tracker.apply(PERFECT, &mut session);
        let seed = tracker.apply(HIT, &mut session);
        assert_eq!(session.combo_counter, 0);
        assert_eq!(seed.levels_gained, 1);
        assert_eq!(session.level, 6);
    }

    #[test]
    fn test_smash_resets_level_but_keeps_highscore() {
        let mut tracker = ProgressionTracker::new(MemoryStore::new());
        let mut session = SessionState {
            level: 6,
            combo_counter: 2,
            highscore: 6,
        };
        let seed = tracker.apply(SMASH, &mut session);
        assert_eq!(seed.reached_level, 6);
        assert_eq!(seed.next_level, 1);
        assert!(!seed.new_highscore);
        assert_eq!(session.level, 1);
        assert_eq!(session.combo_counter, 0);
        assert_eq!(session.highscore, 6);
        assert_eq!(tracker.store().saves(), 0);
    }

    #[test]
    fn test_only_saves_when_beaten() {
        let mut tracker = ProgressionTracker::new(MemoryStore::with_highscore(10));
        let mut session = tracker.load_session();
        assert_eq!(session.highscore, 10);
        for _ in 0..9 {
            tracker.apply(HIT, &mut session);
        }
        assert_eq!(session.level, 10);
        assert_eq!(tracker.store().saves(), 0);
        let seed = tracker.apply(HIT, &mut session);
        assert!(seed.new_highscore);
        assert_eq!(tracker.store().stored(), Some(11));
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let mut tracker = ProgressionTracker::new(MemoryStore::failing());
        let mut session = tracker.load_session();
        let seed = tracker.apply(HIT, &mut session);
        assert!(seed.new_highscore);
        assert!(seed.persist_failed);
        assert_eq!(session.highscore, 2);
        assert_eq!(session.level, 2);
    }

    fn arb_outcome() -> impl Strategy<Value = Outcome> {
        prop_oneof![Just(PERFECT), Just(HIT), Just(SMASH)]
    }

    proptest! {
        #[test]
        fn highscore_never_decreases(outcomes in prop::collection::vec(arb_outcome(), 0..64)) {
            let mut tracker = ProgressionTracker::new(MemoryStore::new());
            let mut session = tracker.load_session();
            let mut best = session.highscore;
            for outcome in outcomes {
                tracker.apply(outcome, &mut session);
                prop_assert!(session.highscore >= best);
                prop_assert!(session.highscore >= session.level);
                prop_assert!(session.level >= 1);
                best = session.highscore;
            }
        }

        #[test]
        fn combo_only_survives_perfects(outcomes in prop::collection::vec(arb_outcome(), 1..64)) {
            let mut tracker = ProgressionTracker::new(MemoryStore::new());
            let mut session = tracker.load_session();
            for outcome in outcomes {
                let before = session.combo_counter;
                tracker.apply(outcome, &mut session);
                if outcome.is_perfect() {
                    prop_assert_eq!(session.combo_counter, before + 1);
                } else {
                    prop_assert_eq!(session.combo_counter, 0);
                }
            }
        }
    }
}
