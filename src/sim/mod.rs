//! Round simulation module
//!
//! All gameplay rules live here. This module must stay free of host concerns:
//! - Fixed per-tick physics only
//! - Randomness is injected, never ambient
//! - Time comes from an injected monotonic clock
//! - No rendering, audio or file I/O

pub mod autopilot;
pub mod config;
pub mod judge;
pub mod physics;
pub mod progress;
pub mod round;
pub mod state;

pub use autopilot::Autopilot;
pub use config::{RoundConfig, Viewport, generate};
pub use judge::{Outcome, SmashCause, judge};
pub use physics::{StepResult, step};
pub use progress::{NextRoundSeed, ProgressionTracker, SessionState};
pub use round::{RoundMachine, RoundStatus};
pub use state::{GameEvent, RoundPhase, RoundState, TrailPoint};
