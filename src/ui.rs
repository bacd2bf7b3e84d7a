//! Read-only presentation snapshots
//!
//! Everything a renderer needs to draw the HUD and result screen, derived
//! from round and session state. Nothing here feeds back into the rules.

use serde::Serialize;

use crate::sim::{NextRoundSeed, Outcome, RoundConfig, SessionState};

/// Background tint, cycles every 15 levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Backdrop {
    Light,
    Dark,
    Night,
}

impl Backdrop {
    pub fn for_level(level: u32) -> Self {
        match level % 15 {
            0..5 => Backdrop::Light,
            5..10 => Backdrop::Dark,
            _ => Backdrop::Night,
        }
    }
}

/// Active-modifier banners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Banner {
    SlowMotion,
    DoubleJumpReady,
    SafePadActive,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::SlowMotion => "Slow Motion!",
            Banner::DoubleJumpReady => "Double Jump Ready!",
            Banner::SafePadActive => "Safe Pad Active",
        }
    }
}

/// Heads-up display contents for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub level: u32,
    pub best: u32,
    /// Shown only while a combo is running
    pub combo: Option<u32>,
    pub banners: Vec<Banner>,
    pub backdrop: Backdrop,
}

impl HudSnapshot {
    pub fn new(config: &RoundConfig, session: &SessionState) -> Self {
        let mut banners = Vec::new();
        if config.slow_motion {
            banners.push(Banner::SlowMotion);
        }
        if config.double_jump_available {
            banners.push(Banner::DoubleJumpReady);
        }
        if config.safe_pad {
            banners.push(Banner::SafePadActive);
        }
        Self {
            level: session.level,
            best: session.highscore,
            combo: (session.combo_counter >= 1).then_some(session.combo_counter),
            banners,
            backdrop: Backdrop::for_level(session.level),
        }
    }
}

/// What to show once a round is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultScreen {
    Survived {
        perfect: bool,
        new_highscore: bool,
    },
    Smashed {
        reached_level: u32,
        new_highscore: bool,
    },
}

impl ResultScreen {
    pub fn new(outcome: Outcome, seed: &NextRoundSeed) -> Self {
        match outcome {
            Outcome::Survived { perfect } => ResultScreen::Survived {
                perfect,
                new_highscore: seed.new_highscore,
            },
            Outcome::Smashed(_) => ResultScreen::Smashed {
                reached_level: seed.reached_level,
                new_highscore: seed.new_highscore,
            },
        }
    }

    /// Headline and optional sub-line
    pub fn lines(&self) -> (String, Option<String>) {
        match *self {
            ResultScreen::Survived { perfect, .. } => (
                "You Survived!".to_string(),
                perfect.then(|| "Perfect!".to_string()),
            ),
            ResultScreen::Smashed { reached_level, .. } => (
                "Smashed!".to_string(),
                Some(format!("You reached level {}", reached_level)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SmashCause, Viewport, generate};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_backdrop_cycle() {
        assert_eq!(Backdrop::for_level(1), Backdrop::Light);
        assert_eq!(Backdrop::for_level(5), Backdrop::Dark);
        assert_eq!(Backdrop::for_level(12), Backdrop::Night);
        assert_eq!(Backdrop::for_level(15), Backdrop::Light);
    }

    #[test]
    fn test_hud_banners_and_combo() {
        let config = generate(45, &mut Pcg32::seed_from_u64(1), Viewport::default());
        let session = SessionState {
            level: 45,
            combo_counter: 0,
            highscore: 50,
        };
        let hud = HudSnapshot::new(&config, &session);
        assert_eq!(hud.banners, vec![Banner::SlowMotion, Banner::SafePadActive]);
        assert_eq!(hud.combo, None);
        assert_eq!(hud.best, 50);

        let session = SessionState {
            combo_counter: 2,
            ..session
        };
        assert_eq!(HudSnapshot::new(&config, &session).combo, Some(2));
    }

    #[test]
    fn test_result_lines() {
        let seed = NextRoundSeed {
            next_level: 1,
            reached_level: 8,
            levels_gained: 0,
            new_highscore: false,
            persist_failed: false,
        };
        let screen = ResultScreen::new(Outcome::Smashed(SmashCause::Mistimed), &seed);
        let (headline, detail) = screen.lines();
        assert_eq!(headline, "Smashed!");
        assert_eq!(detail.as_deref(), Some("You reached level 8"));

        let screen = ResultScreen::new(Outcome::Survived { perfect: true }, &seed);
        assert_eq!(screen.lines().1.as_deref(), Some("Perfect!"));
    }
}
