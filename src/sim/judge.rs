//! Timing judgment at impact

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{PERFECT_WINDOW, SAVE_WINDOW};

/// Why a round was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmashCause {
    /// Never jumped
    NoJump,
    /// Jumped too early, or at/after impact
    Mistimed,
    /// Rose past the platform top before impact
    HitCeiling,
}

/// Result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Survived { perfect: bool },
    Smashed(SmashCause),
}

impl Outcome {
    pub fn survived(self) -> bool {
        matches!(self, Outcome::Survived { .. })
    }

    pub fn is_perfect(self) -> bool {
        matches!(self, Outcome::Survived { perfect: true })
    }
}

/// Classify a round from the last jump instant and the impact instant
///
/// The jump must strictly precede impact by less than the save window; under
/// the perfect window it counts as perfect.
pub fn judge(jump_timestamp: Option<Duration>, impact_timestamp: Duration) -> Outcome {
    let Some(jumped_at) = jump_timestamp else {
        return Outcome::Smashed(SmashCause::NoJump);
    };

    match impact_timestamp.checked_sub(jumped_at) {
        Some(delta) if !delta.is_zero() && delta < SAVE_WINDOW => Outcome::Survived {
            perfect: delta < PERFECT_WINDOW,
        },
        _ => Outcome::Smashed(SmashCause::Mistimed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const IMPACT: Duration = Duration::from_secs(10);

    fn judge_delta(delta: Duration) -> Outcome {
        judge(Some(IMPACT - delta), IMPACT)
    }

    #[test]
    fn test_no_jump_is_smashed() {
        assert_eq!(judge(None, IMPACT), Outcome::Smashed(SmashCause::NoJump));
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(
            judge_delta(Duration::from_millis(300)),
            Outcome::Smashed(SmashCause::Mistimed)
        );
        assert_eq!(
            judge_delta(Duration::from_micros(299_990)),
            Outcome::Survived { perfect: false }
        );
        assert_eq!(
            judge_delta(Duration::from_millis(100)),
            Outcome::Survived { perfect: false }
        );
        assert_eq!(
            judge_delta(Duration::from_micros(99_990)),
            Outcome::Survived { perfect: true }
        );
        assert_eq!(
            judge_delta(Duration::from_millis(50)),
            Outcome::Survived { perfect: true }
        );
    }

    #[test]
    fn test_jump_at_or_after_impact_is_smashed() {
        assert_eq!(
            judge(Some(IMPACT), IMPACT),
            Outcome::Smashed(SmashCause::Mistimed)
        );
        assert_eq!(
            judge(Some(IMPACT + Duration::from_millis(5)), IMPACT),
            Outcome::Smashed(SmashCause::Mistimed)
        );
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(Outcome::Survived { perfect: true }.is_perfect());
        assert!(Outcome::Survived { perfect: false }.survived());
        assert!(!Outcome::Smashed(SmashCause::HitCeiling).survived());
    }

    proptest! {
        #[test]
        fn judgment_is_pure(jump_us in 0u64..20_000_000, impact_us in 0u64..20_000_000) {
            let jump = Duration::from_micros(jump_us);
            let impact = Duration::from_micros(impact_us);
            prop_assert_eq!(judge(Some(jump), impact), judge(Some(jump), impact));
        }

        #[test]
        fn survival_iff_inside_window(jump_us in 0u64..20_000_000, impact_us in 0u64..20_000_000) {
            let outcome = judge(Some(Duration::from_micros(jump_us)), Duration::from_micros(impact_us));
            let inside = impact_us > jump_us && impact_us - jump_us < 300_000;
            prop_assert_eq!(outcome.survived(), inside);
            if inside {
                prop_assert_eq!(outcome.is_perfect(), impact_us - jump_us < 100_000);
            }
        }
    }
}
